//! Monitor cycling and cursor centering.

use super::{active_window, take, ActionError};
use crate::command::Cycle;
use crate::hyprland::{Monitor, Workspace};
use crate::ipc::client::decode;
use crate::ipc::{HyprClient, Transport};
use log::info;

/// Warp the cursor to the center of `monitor`.
pub fn center_cursor<T: Transport>(
    client: &HyprClient<T>,
    monitor: &Monitor,
) -> Result<(), ActionError> {
    let (x, y) = monitor.center();
    let (x, y) = (x.to_string(), y.to_string());
    client.dispatch("movecursor", &[x.as_str(), y.as_str()])?;
    Ok(())
}

/// Focus the next or previous monitor and center the cursor on it.
///
/// The monitor list is read after the dispatch so it reflects the new
/// focus; this cannot be one batched request.
pub fn focus_monitor<T: Transport>(client: &HyprClient<T>, cycle: Cycle) -> Result<(), ActionError> {
    client.dispatch("focusmonitor", &[cycle.as_relative()])?;

    let monitors: Vec<Monitor> = client.query_as("monitors")?;
    let focused = monitors
        .iter()
        .find(|m| m.focused)
        .ok_or_else(|| ActionError::DataConsistency("no monitor is focused".into()))?;
    center_cursor(client, focused)
}

/// Move the active window to the active workspace of the next or previous
/// monitor, in the order Hyprland lists monitors.
pub fn move_to_monitor<T: Transport>(
    client: &HyprClient<T>,
    cycle: Cycle,
) -> Result<(), ActionError> {
    let [window, workspaces, monitors] =
        take::<3>(client.batch_query(&["activewindow", "workspaces", "monitors"])?)?;
    let Some(window) = active_window(window)? else {
        info!("no active window to move");
        return Ok(());
    };
    let workspaces: Vec<Workspace> = decode(workspaces)?;
    let monitors: Vec<Monitor> = decode(monitors)?;

    let target = target_monitor(&workspaces, &monitors, window.workspace.id, cycle)?;
    let workspace = target.active_workspace.id.to_string();
    client.dispatch("movetoworkspace", &[workspace.as_str()])?;
    center_cursor(client, target)
}

/// Resolve the monitor showing `workspace` and step through the ring.
fn target_monitor<'a>(
    workspaces: &[Workspace],
    monitors: &'a [Monitor],
    workspace: i64,
    cycle: Cycle,
) -> Result<&'a Monitor, ActionError> {
    let monitor_name = workspaces
        .iter()
        .find(|w| w.id == workspace)
        .map(|w| w.monitor.as_str())
        .ok_or_else(|| {
            ActionError::DataConsistency(format!("workspace {} is not listed", workspace))
        })?;
    let index = monitors
        .iter()
        .position(|m| m.name == monitor_name)
        .ok_or_else(|| {
            ActionError::DataConsistency(format!("monitor {} is not listed", monitor_name))
        })?;
    Ok(&monitors[cycle.step(index, monitors.len())])
}
