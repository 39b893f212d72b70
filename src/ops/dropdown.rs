//! Dropdown terminal backed by a multiplexer session.
//!
//! Show/hide behaviour (pinning, sliding, sizing) comes from window rules
//! on the terminal's class, e.g.
//!
//! ```text
//! windowrulev2 = float,class:^(dropdown-term)$
//! windowrulev2 = pin,class:^(dropdown-term)$
//! windowrulev2 = size 50% 35%,class:^(dropdown-term)$
//! ```

use super::ActionError;
use crate::config::DropdownConfig;
use crate::hyprland::Client;
use crate::ipc::{HyprClient, Transport};
use crate::traits::Launcher;
use log::info;

/// Detach the session if a dropdown window exists, otherwise spawn one.
pub fn dropdown_term<T: Transport>(
    client: &HyprClient<T>,
    launcher: &dyn Launcher,
    config: &DropdownConfig,
    terminal: &str,
    session: &str,
) -> Result<(), ActionError> {
    let clients: Vec<Client> = client.query_as("clients")?;
    let mux = config.multiplexer.as_str();

    if clients.iter().any(|c| c.class == config.class) {
        info!("dropdown terminal present, detaching session {}", session);
        launcher.spawn(mux, &["detach".to_string(), "-s".to_string(), session.to_string()])?;
    } else {
        info!("spawning dropdown terminal {}", terminal);
        let s = shell_quote(session);
        let attach = format!("{mux} attach -t {s} || {mux} new-session -s {s}");
        launcher.spawn(
            terminal,
            &[
                "--class".to_string(),
                config.class.clone(),
                "-e".to_string(),
                "sh".to_string(),
                "-c".to_string(),
                attach,
            ],
        )?;
    }
    Ok(())
}

/// Quote `s` for `sh -c` unless it is made of plainly safe characters.
fn shell_quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':'));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingLauncher, ScriptedTransport};

    const WITH_DROPDOWN: &str = r#"[
        {"address":"0x1","class":"firefox","title":"a","workspace":{"id":1,"name":"1"},"focusHistoryID":1},
        {"address":"0x2","class":"dropdown-term","title":"tmux","workspace":{"id":1,"name":"1"},"focusHistoryID":0}
    ]"#;

    const WITHOUT_DROPDOWN: &str = r#"[
        {"address":"0x1","class":"firefox","title":"a","workspace":{"id":1,"name":"1"},"focusHistoryID":0}
    ]"#;

    fn spawned(clients: &str, session: &str) -> Vec<Vec<String>> {
        let client = HyprClient::new(ScriptedTransport::new(&[clients]));
        let launcher = RecordingLauncher::default();
        dropdown_term(&client, &launcher, &DropdownConfig::default(), "alacritty", session)
            .unwrap();
        assert_eq!(client.transport().requests(), vec!["j/clients"]);
        launcher.spawned.into_inner()
    }

    #[test]
    fn existing_window_detaches_session() {
        assert_eq!(
            spawned(WITH_DROPDOWN, "hypr"),
            vec![vec!["tmux", "detach", "-s", "hypr"]]
        );
    }

    #[test]
    fn missing_window_spawns_terminal() {
        assert_eq!(
            spawned(WITHOUT_DROPDOWN, "hypr"),
            vec![vec![
                "alacritty",
                "--class",
                "dropdown-term",
                "-e",
                "sh",
                "-c",
                "tmux attach -t hypr || tmux new-session -s hypr",
            ]]
        );
    }

    #[test]
    fn session_name_is_quoted_for_the_shell() {
        let line = spawned("[]", "my session").remove(0);
        assert_eq!(
            line.last().unwrap(),
            "tmux attach -t 'my session' || tmux new-session -s 'my session'"
        );
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("hypr-1"), "hypr-1");
    }
}
