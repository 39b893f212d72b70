//! Subprocess-backed [`Menu`] and [`Launcher`].

use crate::config::MenuConfig;
use crate::traits::{Launcher, Menu};
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

/// Errors from running an external program.
#[derive(Debug, thiserror::Error)]
pub enum ExternalError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} printed an invalid selection: {output:?}")]
    InvalidSelection { program: String, output: String },
}

/// A dmenu-style picker (rofi by default).
///
/// Labels are written to stdin one per line; the program is expected to
/// print the selected index (`-format i`) or nothing when cancelled.
#[derive(Debug, Clone)]
pub struct DmenuPicker {
    program: String,
    args: Vec<String>,
}

impl DmenuPicker {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }
}

impl Menu for DmenuPicker {
    fn select(&self, items: &[String]) -> Result<Option<usize>, ExternalError> {
        let spawn_err = |source| ExternalError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(items.join("\n").as_bytes()).map_err(spawn_err)?;
        }
        let output = child.wait_with_output().map_err(spawn_err)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("{} exited with {}, printed {:?}", self.program, output.status, stdout);
        parse_selection(&self.program, &stdout)
    }
}

/// Interpret a picker's stdout.  Empty output means the user cancelled.
fn parse_selection(program: &str, stdout: &str) -> Result<Option<usize>, ExternalError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ExternalError::InvalidSelection {
            program: program.to_string(),
            output: trimmed.to_string(),
        })
}

/// Starts programs as detached children.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn spawn(&self, program: &str, args: &[String]) -> Result<(), ExternalError> {
        debug!("spawning {} {:?}", program, args);
        Command::new(program)
            .args(args)
            .spawn()
            .map(|_| ())
            .map_err(|source| ExternalError::Spawn {
                program: program.to_string(),
                source,
            })
    }
}
