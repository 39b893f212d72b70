//! Minimize and restore windows.
//!
//! Hyprland has no minimized state, so a minimized window is one parked on
//! the `special:minimized` workspace and tagged `workspace:<origin>`.  The
//! tag is the only record of where it came from; nothing is stored locally.

use super::{active_window, ActionError};
use crate::hyprland::types::{MINIMIZED_WORKSPACE, ORIGIN_TAG_PREFIX};
use crate::hyprland::Client;
use crate::ipc::{HyprClient, Transport};
use crate::traits::Menu;
use log::info;

/// Tag the active window with its workspace and move it out of sight.
pub fn minimize<T: Transport>(client: &HyprClient<T>) -> Result<(), ActionError> {
    let Some(window) = active_window(client.query("activewindow")?)? else {
        info!("no active window to minimize");
        return Ok(());
    };
    if window.workspace.name == MINIMIZED_WORKSPACE {
        info!("{} is already minimized", window.address);
        return Ok(());
    }

    let origin = window.workspace.id;
    client.batch_exec(&[
        format!("dispatch tagwindow +{}{}", ORIGIN_TAG_PREFIX, origin),
        format!("dispatch movetoworkspacesilent {}", MINIMIZED_WORKSPACE),
    ])?;
    Ok(())
}

/// Let the user pick a minimized window and move it back to its origin.
pub fn unminimize<T: Transport>(client: &HyprClient<T>, menu: &dyn Menu) -> Result<(), ActionError> {
    let clients: Vec<Client> = client.query_as("clients")?;
    let minimized: Vec<&Client> = clients
        .iter()
        .filter(|c| c.workspace.name == MINIMIZED_WORKSPACE)
        .collect();
    if minimized.is_empty() {
        info!("no minimized windows");
        return Ok(());
    }

    let labels: Vec<String> = minimized.iter().map(|c| menu_label(c)).collect();
    let Some(index) = menu.select(&labels)? else {
        info!("restore cancelled");
        return Ok(());
    };
    let window = minimized.get(index).ok_or_else(|| {
        ActionError::DataConsistency(format!(
            "menu returned index {} for {} entries",
            index,
            minimized.len()
        ))
    })?;

    let origin = match window.origin_workspace() {
        Some(Ok(id)) => id,
        Some(Err(tag)) => {
            return Err(ActionError::DataConsistency(format!(
                "{} has malformed origin tag {:?}",
                window.address, tag
            )))
        }
        None => {
            return Err(ActionError::DataConsistency(format!(
                "{} has no {} tag",
                window.address, ORIGIN_TAG_PREFIX
            )))
        }
    };

    let address = &window.address;
    client.batch_exec(&[
        format!("dispatch tagwindow -{}{} address:{}", ORIGIN_TAG_PREFIX, origin, address),
        format!("dispatch movetoworkspace {},address:{}", origin, address),
    ])?;
    Ok(())
}

/// Row for a rofi-style menu: the title, with the class as icon hint.
fn menu_label(c: &Client) -> String {
    format!("{}\0icon\x1f{}", c.title, c.class)
}
