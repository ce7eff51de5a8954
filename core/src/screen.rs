//! Screen envelopes: a root descriptor plus the chrome around it.

use crate::descriptor::Descriptor;
use crate::error::Result;
use crate::group::{group, Entry};
use crate::ingest::ingest;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const CARD_SCREEN_BACKGROUND: &str = "#F5F5F5";
const CARD_SCREEN_TOOLBAR: &str = "#2196F3";
const CARD_SCREEN_STATUS_BAR: &str = "#1976D2";

/// A screen: an optional root descriptor plus toolbar, background and status bar colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Screen {
    pub id: String,
    /// Shown in the toolbar; no toolbar without a title.
    pub title: Option<String>,
    pub root: Option<Descriptor>,
    pub toolbar_color: Option<String>,
    pub background_color: Option<String>,
    pub status_bar_color: Option<String>,
}

impl Screen {
    /// Reads a screen from a JSON value with the same tolerance as [`ingest`].
    pub fn from_value(value: &Value) -> Screen {
        let field = |key: &str| match value.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };

        let root = value
            .get("rootComponent")
            .filter(|root| !root.is_null())
            .map(ingest);
        if root.is_none() {
            warn!("screen has no root component");
        }

        let screen = Screen {
            id: field("id").unwrap_or_else(Descriptor::synthesize_id),
            title: field("title"),
            root,
            toolbar_color: field("toolbarColor"),
            background_color: field("backgroundColor"),
            status_bar_color: field("statusBarColor"),
        };
        debug!(id = %screen.id, "read screen");
        screen
    }

    pub fn from_json_str(json: &str) -> Result<Screen> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Screen::from_value(&value))
    }
}

/// A screen described as a flat list of header and row entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardScreen {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<Entry>,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_toolbar")]
    pub toolbar_color: String,
}

fn default_background() -> String {
    CARD_SCREEN_BACKGROUND.to_string()
}

fn default_toolbar() -> String {
    CARD_SCREEN_TOOLBAR.to_string()
}

impl CardScreen {
    pub fn from_json_str(json: &str) -> Result<CardScreen> {
        Ok(serde_json::from_str(json)?)
    }

    /// Groups the entries and wraps the result in a [`Screen`].
    pub fn into_screen(self) -> Screen {
        Screen {
            root: Some(group(&self.items)),
            id: self.id,
            title: Some(self.title),
            toolbar_color: Some(self.toolbar_color),
            background_color: Some(self.background_color),
            status_bar_color: Some(CARD_SCREEN_STATUS_BAR.to_string()),
        }
    }
}
