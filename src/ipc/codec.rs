//! Request shapes and reply decoding for the command socket.
//!
//! # Wire format
//!
//! ```text
//! dispatch focuswindow address:0x55d1      plain command, reply "ok"
//! j/clients                                 one JSON document back
//! [[BATCH]]j/clients;j/activeworkspace      JSON documents joined by "\n\n"
//! [[BATCH]]dispatch a;dispatch b            plain batch, reply discarded
//! ```

use super::IpcError;
use serde_json::Value;

/// Prefix that asks Hyprland for a JSON reply.
pub const JSON_PREFIX: &str = "j/";

/// Prefix that marks a batched request.
pub const BATCH_PREFIX: &str = "[[BATCH]]";

/// Separator between sub-commands of a batch.
pub const BATCH_SEPARATOR: &str = ";";

/// Separator between the sub-replies of a batched JSON reply.
pub const REPLY_SEPARATOR: &str = "\n\n";

/// One message for the command socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// A literal command such as `dispatch ...` or `keyword ...`.
    Plain(String),
    /// A single data query answered with JSON.
    Json(String),
    /// Several data queries answered with one concatenated reply.
    BatchJson(Vec<String>),
    /// Several plain commands delivered as one message.
    BatchExec(Vec<String>),
}

impl Request {
    /// Render the request exactly as it goes over the socket.
    pub fn encode(&self) -> String {
        match self {
            Request::Plain(cmd) => cmd.clone(),
            Request::Json(name) => format!("{}{}", JSON_PREFIX, name),
            Request::BatchJson(names) => {
                let parts: Vec<String> = names
                    .iter()
                    .map(|n| format!("{}{}", JSON_PREFIX, n))
                    .collect();
                format!("{}{}", BATCH_PREFIX, parts.join(BATCH_SEPARATOR))
            }
            Request::BatchExec(lines) => {
                format!("{}{}", BATCH_PREFIX, lines.join(BATCH_SEPARATOR))
            }
        }
    }
}

/// Decode the reply of a [`Request::Json`].
pub fn parse_query(reply: &str) -> Result<Value, IpcError> {
    serde_json::from_str(reply.trim())
        .map_err(|e| IpcError::Protocol(format!("invalid JSON reply: {}", e)))
}

/// Decode the reply of a [`Request::BatchJson`] with `expected` sub-queries.
///
/// The values are returned in request order.  A different number of
/// segments than requested means the reply cannot be correlated and is
/// rejected.
pub fn parse_batch(reply: &str, expected: usize) -> Result<Vec<Value>, IpcError> {
    let segments: Vec<&str> = reply.trim_end().split(REPLY_SEPARATOR).collect();
    if segments.len() != expected {
        return Err(IpcError::Protocol(format!(
            "batched reply has {} segment(s), expected {}",
            segments.len(),
            expected
        )));
    }
    segments
        .into_iter()
        .enumerate()
        .map(|(i, seg)| {
            serde_json::from_str(seg.trim()).map_err(|e| {
                IpcError::Protocol(format!("invalid JSON in batch segment {}: {}", i, e))
            })
        })
        .collect()
}
