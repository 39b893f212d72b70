//! Hyprland's data model as seen through `j/` queries.
//!
//! Nothing in here talks to the socket; see [`crate::ipc`] for that.

pub mod types;

pub use types::{Client, Monitor, OptionValue, Workspace, WorkspaceRef, WorkspaceRule};
