//! Test doubles shared by the unit tests.

use crate::external::ExternalError;
use crate::ipc::{IpcError, Transport};
use crate::traits::{Launcher, Menu};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A transport that answers from a fixed script and records every request.
///
/// Running out of scripted replies fails the call the way a vanished
/// compositor would.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Vec<u8>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(replies: &[&str]) -> Self {
        Self::from_bytes(replies.iter().map(|r| r.as_bytes().to_vec()).collect())
    }

    pub fn from_bytes(replies: Vec<Vec<u8>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &[u8]) -> Result<Vec<u8>, IpcError> {
        self.requests
            .borrow_mut()
            .push(String::from_utf8_lossy(request).into_owned());
        self.replies.borrow_mut().pop_front().ok_or_else(|| {
            IpcError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "script exhausted",
            ))
        })
    }
}

/// Menu that always returns the same answer and records what it was shown.
#[derive(Debug, Default)]
pub struct FixedMenu {
    pub answer: Option<usize>,
    pub shown: RefCell<Vec<Vec<String>>>,
}

impl FixedMenu {
    pub fn answering(answer: Option<usize>) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
        }
    }
}

impl Menu for FixedMenu {
    fn select(&self, items: &[String]) -> Result<Option<usize>, ExternalError> {
        self.shown.borrow_mut().push(items.to_vec());
        Ok(self.answer)
    }
}

/// Launcher that records spawned command lines instead of running them.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub spawned: RefCell<Vec<Vec<String>>>,
}

impl Launcher for RecordingLauncher {
    fn spawn(&self, program: &str, args: &[String]) -> Result<(), ExternalError> {
        let mut line = vec![program.to_string()];
        line.extend(args.iter().cloned());
        self.spawned.borrow_mut().push(line);
        Ok(())
    }
}
