//! Seams to the programs hyprhelper drives but does not implement.
//!
//! The socket side has its own seam, [`Transport`](crate::ipc::Transport).
//! The traits here cover the subprocess collaborators: the menu used to pick
//! a minimized window, and the launcher that starts the terminal and talks
//! to the terminal multiplexer.  Concrete implementations live in
//! [`external`](crate::external); tests substitute recording doubles.

use crate::external::ExternalError;

/// An interactive picker over a list of labels.
pub trait Menu {
    /// Show `items` and return the index the user picked, or `None` if the
    /// selection was cancelled.
    fn select(&self, items: &[String]) -> Result<Option<usize>, ExternalError>;
}

/// Starts external programs without waiting for them.
pub trait Launcher {
    /// Spawn `program` with `args` and return as soon as it is running.
    fn spawn(&self, program: &str, args: &[String]) -> Result<(), ExternalError>;
}
