//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML loading.
//! Every field has a sensible default so the screen works out of the box.

use serde::{Deserialize, Serialize};

/// Root screen configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    #[serde(default = "default_roster")]
    pub roster: Vec<RosterEntry>,
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            ui: default_ui(),
        }
    }
}

/// One seed row for the roster. Only the name is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name shown in the row.
    pub name: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub muted: bool,
}

/// Screen appearance settings the host may consult.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_roster() -> Vec<RosterEntry> {
    [
        "John Smith",
        "Dan Smith",
        "Ben Smith",
        "Tadeu Smith",
        "Miguel Smith",
        "Guilherme Smith",
    ]
    .into_iter()
    .map(|name| RosterEntry {
        name: name.into(),
        favorite: false,
        muted: false,
    })
    .collect()
}
fn default_title() -> String {
    "Custom Swipe Actions".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        title: default_title(),
    }
}
