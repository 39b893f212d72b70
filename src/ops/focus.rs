//! Toggle between the two most recently focused windows of a workspace.

use super::{take, ActionError};
use crate::hyprland::{Client, WorkspaceRef};
use crate::ipc::client::decode;
use crate::ipc::{HyprClient, Transport};
use log::info;

/// Focus the second most recently focused window on the active workspace.
///
/// With fewer than two windows on the workspace this does nothing.
pub fn last_focused<T: Transport>(client: &HyprClient<T>) -> Result<(), ActionError> {
    let [clients, active] = take::<2>(client.batch_query(&["clients", "activeworkspace"])?)?;
    let clients: Vec<Client> = decode(clients)?;
    let active: WorkspaceRef = decode(active)?;

    match previous_window(&clients, active.id) {
        Some(target) => {
            let address = format!("address:{}", target.address);
            client.dispatch("focuswindow", &[address.as_str()])?;
        }
        None => info!("fewer than two windows on workspace {}", active.id),
    }
    Ok(())
}

/// The window on `workspace` with the second lowest focus history id.
fn previous_window(clients: &[Client], workspace: i64) -> Option<&Client> {
    let mut on_workspace: Vec<&Client> = clients
        .iter()
        .filter(|c| c.workspace.id == workspace)
        .collect();
    on_workspace.sort_by_key(|c| c.focus_history_id);
    on_workspace.get(1).copied()
}
