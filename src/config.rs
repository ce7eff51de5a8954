//! Render defaults.
//!
//! Everything a descriptor may leave out and the renderer has to fill in: text sizes, colors,
//! button styling, image resources. Loaded from TOML; every key is optional.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Font size in points when a text doesn't set one.
    pub size: f64,
    pub color: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        TextConfig {
            size: 16.,
            color: "#000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Label of buttons without text.
    pub label: String,
    pub background: String,
    pub text_color: String,
    pub corner_radius: f64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        ButtonConfig {
            label: "Button".to_string(),
            background: "#6200EE".to_string(),
            text_color: "#FFFFFF".to_string(),
            corner_radius: 4.,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub background: String,
    pub corner_radius: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            background: "#FFFFFF".to_string(),
            corner_radius: 4.,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub divider_color: String,
    pub divider_thickness: f64,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            divider_color: "#E0E0E0".to_string(),
            divider_thickness: 1.,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub background: String,
    pub toolbar: String,
    pub toolbar_text: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            background: "#FFFFFF".to_string(),
            toolbar: "#6200EE".to_string(),
            toolbar_text: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Resource used for keys missing from `resources`.
    pub default_resource: String,
    /// Image keys to bundled resource names.
    pub resources: BTreeMap<String, String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            default_resource: "ic_launcher_foreground".to_string(),
            resources: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub text: TextConfig,
    pub button: ButtonConfig,
    pub input: InputConfig,
    pub list: ListConfig,
    pub screen: ScreenConfig,
    pub images: ImageConfig,

    /// Color used when a color string can't be parsed.
    pub fallback_color: String,

    /// Color of the messages shown in place of components that can't be rendered.
    pub placeholder_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            text: TextConfig::default(),
            button: ButtonConfig::default(),
            input: InputConfig::default(),
            list: ListConfig::default(),
            screen: ScreenConfig::default(),
            images: ImageConfig::default(),
            fallback_color: "#000000".to_string(),
            placeholder_color: "red".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Loads a config file, falling back to the defaults if it's missing or malformed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "using default render config");
                Self::default()
            }
        }
    }
}
