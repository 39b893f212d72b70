//! Hyprland command-socket IPC.
//!
//! The layer is split the same way the wire is:
//!
//! * [`transport`] moves bytes over a fresh Unix stream per request.
//! * [`codec`] builds the request shapes and decodes JSON replies.
//! * [`client`] combines both into the calls the actions use.

pub mod client;
pub mod codec;
pub mod transport;

use std::path::PathBuf;

pub use client::HyprClient;
pub use transport::{Transport, UnixSocketTransport};

/// Errors produced while talking to the compositor.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// The socket does not exist or the compositor refused the connection.
    #[error("connect to {}: {source}", path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The connection broke while writing the request or reading the reply.
    #[error("socket io error: {0}")]
    Io(#[from] std::io::Error),

    /// The reply does not match the wire format this client expects.
    #[error("protocol error: {0}")]
    Protocol(String),
}
