//! The compound actions.
//!
//! Each action is a short function over a [`HyprClient`]: read a snapshot
//! (one batched query wherever several related records are needed), decide,
//! then dispatch.  Conditions such as "nothing to do" are logged and return
//! `Ok(())`; anything that prevents a correct decision is an
//! [`ActionError`].

pub mod dropdown;
pub mod focus;
pub mod gaps;
pub mod minimize;
pub mod monitor;

use crate::command::Command;
use crate::config::Config;
use crate::external::ExternalError;
use crate::hyprland::Client;
use crate::ipc::client::decode;
use crate::ipc::{HyprClient, IpcError, Transport};
use crate::traits::{Launcher, Menu};
use serde_json::Value;

/// Possible errors from running an action.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Ipc(#[from] IpcError),

    #[error(transparent)]
    External(#[from] ExternalError),

    /// Compositor state contradicts itself or this tool's conventions.
    #[error("inconsistent compositor state: {0}")]
    DataConsistency(String),
}

/// Collaborators an action may need besides the IPC client.
pub struct Context<'a> {
    pub config: &'a Config,
    pub menu: &'a dyn Menu,
    pub launcher: &'a dyn Launcher,
}

/// Run exactly one action.
pub fn run<T: Transport>(
    client: &HyprClient<T>,
    command: &Command,
    ctx: &Context<'_>,
) -> Result<(), ActionError> {
    match command {
        Command::LastFocused => focus::last_focused(client),
        Command::DropdownTerm { terminal, session } => {
            let dropdown = &ctx.config.dropdown;
            dropdown::dropdown_term(
                client,
                ctx.launcher,
                dropdown,
                terminal.as_deref().unwrap_or(&dropdown.terminal),
                session.as_deref().unwrap_or(&dropdown.session),
            )
        }
        Command::FocusMonitor(cycle) => monitor::focus_monitor(client, *cycle),
        Command::MoveToMonitor(cycle) => monitor::move_to_monitor(client, *cycle),
        Command::Gaps(request) => gaps::adjust_gaps(client, request),
        Command::Minimize => minimize::minimize(client),
        Command::Unminimize => minimize::unminimize(client, ctx.menu),
    }
}

/// Split a batched reply into exactly `N` values.
pub(crate) fn take<const N: usize>(values: Vec<Value>) -> Result<[Value; N], IpcError> {
    values.try_into().map_err(|v: Vec<Value>| {
        IpcError::Protocol(format!("expected {} batched values, got {}", N, v.len()))
    })
}

/// Decode an `activewindow` reply.  Hyprland answers `{}` when nothing is
/// focused.
pub(crate) fn active_window(value: Value) -> Result<Option<Client>, IpcError> {
    if matches!(&value, Value::Object(map) if map.is_empty()) {
        return Ok(None);
    }
    decode(value).map(Some)
}
