//! **hyprhelper** — compound window and monitor actions for Hyprland.
//!
//! Hyprland exposes single dispatchers over its command socket; hyprhelper
//! combines them into behaviours the compositor lacks: toggling to the last
//! focused window, cycling monitors with the cursor following, a dropdown
//! terminal, minimize/restore, and temporary gap adjustment.
//!
//! # Architecture
//!
//! * [`ipc`] — the command-socket client: one connection per request, plain
//!   and JSON queries, and the `[[BATCH]]` form used to read a consistent
//!   snapshot in a single round trip.
//! * [`hyprland`] — typed records for the JSON Hyprland returns.
//! * [`ops`] — the actions, generic over [`ipc::Transport`] so they run
//!   against a scripted transport in tests.
//! * [`traits`] / [`external`] — the menu and process launcher the actions
//!   drive.

pub mod command;
pub mod config;
pub mod external;
pub mod hyprland;
pub mod ipc;
pub mod ops;
pub mod traits;

#[cfg(test)]
mod testing;
