//! The operations hyprhelper can run.
//!
//! [`Command`] is the closed set of actions; the CLI front end parses
//! arguments into one and hands it to [`ops::run`](crate::ops::run).

use std::collections::BTreeSet;
use std::fmt;

/// Direction through the monitor ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cycle {
    Next,
    Previous,
}

impl Cycle {
    /// Relative argument understood by `focusmonitor`.
    pub fn as_relative(self) -> &'static str {
        match self {
            Cycle::Next => "+1",
            Cycle::Previous => "-1",
        }
    }

    /// Step from `index` in a ring of `len` elements.
    ///
    /// Wraps in both directions; `len` must be non-zero.
    pub fn step(self, index: usize, len: usize) -> usize {
        let delta: i64 = match self {
            Cycle::Next => 1,
            Cycle::Previous => -1,
        };
        (index as i64 + delta).rem_euclid(len as i64) as usize
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cycle::Next => write!(f, "next"),
            Cycle::Previous => write!(f, "previous"),
        }
    }
}

/// Which gaps a [`GapsRequest`] changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GapLocation {
    Inner,
    Outer,
}

/// Relative gap change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapChange {
    Increase(u32),
    Decrease(u32),
}

impl GapChange {
    /// Apply the change to `current`, never going below zero.
    pub fn apply(self, current: i64) -> i64 {
        match self {
            GapChange::Increase(n) => current + i64::from(n),
            GapChange::Decrease(n) => (current - i64::from(n)).max(0),
        }
    }
}

/// Arguments of the `gaps` action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapsRequest {
    pub location: GapLocation,
    pub change: GapChange,
    /// Workspace ids the action must leave untouched.
    pub exclude: BTreeSet<i64>,
}

/// Every action hyprhelper can perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Focus the previously focused window on the active workspace.
    LastFocused,

    /// Hide the dropdown terminal if it exists, spawn it otherwise.
    ///
    /// `None` fields fall back to the configuration file.
    DropdownTerm {
        terminal: Option<String>,
        session: Option<String>,
    },

    /// Focus the next or previous monitor and center the cursor on it.
    FocusMonitor(Cycle),

    /// Move the active window to the next or previous monitor.
    MoveToMonitor(Cycle),

    /// Adjust the active workspace's gaps for the running session.
    Gaps(GapsRequest),

    /// Park the active window on the minimized special workspace.
    Minimize,

    /// Pick a minimized window and send it back where it came from.
    Unminimize,
}
