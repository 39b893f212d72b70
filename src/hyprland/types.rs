//! Records decoded from Hyprland's JSON replies.
//!
//! Only the fields the actions read are declared; serde ignores the rest.
//! A missing required field fails decoding, fields Hyprland omits in
//! practice are `Option`s.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Name of the special workspace minimized windows are parked on.
pub const MINIMIZED_WORKSPACE: &str = "special:minimized";

/// Tag prefix recording a minimized window's origin workspace.
pub const ORIGIN_TAG_PREFIX: &str = "workspace:";

/// `{id, name}` reference embedded in clients and monitors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkspaceRef {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A managed window, as returned by `j/clients` and `j/activewindow`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Client {
    pub address: String,
    pub class: String,
    pub title: String,
    pub workspace: WorkspaceRef,
    /// `0` is the most recently focused window.
    #[serde(rename = "focusHistoryID")]
    pub focus_history_id: i64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Client {
    /// Workspace id stored in the `workspace:<id>` tag, if any.
    ///
    /// Hyprland lists tags added at runtime with a trailing `*`; that marker
    /// is not part of the id.
    pub fn origin_workspace(&self) -> Option<Result<i64, String>> {
        let tag = self
            .tags
            .iter()
            .find(|t| t.starts_with(ORIGIN_TAG_PREFIX))?;
        let raw = tag[ORIGIN_TAG_PREFIX.len()..].trim_end_matches('*');
        Some(raw.parse().map_err(|_| tag.clone()))
    }
}

/// An entry of `j/workspaces`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Workspace {
    pub id: i64,
    pub name: String,
    pub monitor: String,
}

/// An entry of `j/monitors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// `wl_output` transform, 0–7.  Odd values rotate by a quarter turn.
    #[serde(default)]
    pub transform: u8,
    #[serde(default)]
    pub focused: bool,
    pub active_workspace: WorkspaceRef,
}

impl Monitor {
    /// Width and height as laid out on screen, after rotation.
    pub fn effective_size(&self) -> (i32, i32) {
        if self.transform % 2 == 1 {
            (self.height, self.width)
        } else {
            (self.width, self.height)
        }
    }

    /// Center point of the monitor in global layout coordinates.
    pub fn center(&self) -> (i32, i32) {
        let (w, h) = self.effective_size();
        (self.x + w.div_euclid(2), self.y + h.div_euclid(2))
    }
}

/// An entry of `j/workspacerules`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRule {
    pub workspace_string: String,
    #[serde(default)]
    pub gaps_in: Option<Vec<GapValue>>,
    #[serde(default)]
    pub gaps_out: Option<Vec<GapValue>>,
}

impl WorkspaceRule {
    /// Top inner gap override.
    pub fn inner(&self) -> Option<i64> {
        self.gaps_in.as_ref()?.first().map(|g| g.0)
    }

    /// Top outer gap override.
    pub fn outer(&self) -> Option<i64> {
        self.gaps_out.as_ref()?.first().map(|g| g.0)
    }
}

/// One side of a gap override.
///
/// Depending on the Hyprland version this is a number or a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapValue(pub i64);

impl<'de> Deserialize<'de> for GapValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Visitor;
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = GapValue;
            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "integer or numeric string")
            }
            fn visit_i64<E>(self, n: i64) -> Result<GapValue, E> {
                Ok(GapValue(n))
            }
            fn visit_u64<E>(self, n: u64) -> Result<GapValue, E>
            where
                E: DeError,
            {
                i64::try_from(n)
                    .map(GapValue)
                    .map_err(|_| DeError::custom("gap value out of range"))
            }
            fn visit_str<E>(self, s: &str) -> Result<GapValue, E>
            where
                E: DeError,
            {
                s.trim()
                    .parse()
                    .map(GapValue)
                    .map_err(|_| DeError::custom(format!("invalid gap value: {:?}", s)))
            }
        }
        deserializer.deserialize_any(V)
    }
}

/// Reply of `j/getoption <name>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptionValue {
    pub option: String,
    #[serde(default)]
    pub int: Option<i64>,
    #[serde(default)]
    pub custom: Option<String>,
}

impl OptionValue {
    /// Leading integer of the option.
    ///
    /// CSS-style gap options are reported as `custom: "5 5 5 5"`; plain
    /// integer options as `int`.
    pub fn leading_int(&self) -> Option<i64> {
        if let Some(custom) = &self.custom {
            return custom.split_whitespace().next()?.parse().ok();
        }
        self.int
    }
}
