//! The IPC calls the actions are written against.

use super::codec::{parse_batch, parse_query, Request};
use super::transport::Transport;
use super::IpcError;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Hyprland command-socket client.
///
/// Holds no connection; every method is one full round trip through the
/// [`Transport`].  Errors are passed through unchanged and never retried.
pub struct HyprClient<T: Transport> {
    transport: T,
}

impl<T: Transport> HyprClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a single JSON query such as `clients` or `monitors`.
    pub fn query(&self, name: &str) -> Result<Value, IpcError> {
        let reply = self.round_trip(&Request::Json(name.to_string()))?;
        parse_query(&reply)
    }

    /// Run a single JSON query and decode it into a record type.
    pub fn query_as<D: DeserializeOwned>(&self, name: &str) -> Result<D, IpcError> {
        decode(self.query(name)?)
    }

    /// Run several JSON queries as one message.
    ///
    /// `result[i]` answers `names[i]`; all values come from the same
    /// compositor snapshot.
    pub fn batch_query(&self, names: &[&str]) -> Result<Vec<Value>, IpcError> {
        let request = Request::BatchJson(names.iter().map(|n| n.to_string()).collect());
        let reply = self.round_trip(&request)?;
        parse_batch(&reply, names.len())
    }

    /// Submit several plain commands as one message.  The reply is ignored.
    pub fn batch_exec(&self, lines: &[String]) -> Result<(), IpcError> {
        self.round_trip(&Request::BatchExec(lines.to_vec()))?;
        Ok(())
    }

    /// Send `dispatch <action> <args...>`.
    pub fn dispatch(&self, action: &str, args: &[&str]) -> Result<(), IpcError> {
        let mut cmd = format!("dispatch {}", action);
        for arg in args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        let reply = self.round_trip(&Request::Plain(cmd))?;
        if reply.trim() != "ok" {
            warn!("dispatch {} answered: {}", action, reply.trim());
        }
        Ok(())
    }

    /// Send `keyword <assignment>`.
    pub fn set_keyword(&self, assignment: &str) -> Result<(), IpcError> {
        let reply = self.round_trip(&Request::Plain(format!("keyword {}", assignment)))?;
        if reply.trim() != "ok" {
            warn!("keyword {} answered: {}", assignment, reply.trim());
        }
        Ok(())
    }

    fn round_trip(&self, request: &Request) -> Result<String, IpcError> {
        let encoded = request.encode();
        debug!("request: {}", encoded);
        let reply = self.transport.send(encoded.as_bytes())?;
        String::from_utf8(reply)
            .map_err(|e| IpcError::Protocol(format!("reply is not utf-8: {}", e)))
    }
}

/// Decode one reply value into a record type.
///
/// Missing required fields are reported as a protocol error: they mean the
/// compositor speaks a different JSON schema than this client.
pub fn decode<D: DeserializeOwned>(value: Value) -> Result<D, IpcError> {
    serde_json::from_value(value)
        .map_err(|e| IpcError::Protocol(format!("unexpected reply shape: {}", e)))
}
