//! Panel fixtures: serialized descriptions of a panel's DOM.

use crate::model::{FixtureError, ItemRect, Px};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_normal() -> String {
    "normal".to_string()
}

fn default_label_count() -> usize {
    1
}

/// Toggle control description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonFixture {
    /// `data-open-title` value.
    #[serde(default)]
    pub open_title: Option<String>,
    /// `data-close-title` value.
    #[serde(default)]
    pub close_title: Option<String>,
    /// Number of label elements inside the control.
    #[serde(default = "default_label_count")]
    pub labels: usize,
}

/// A panel as the host would present it.
///
/// ```toml
/// expand_height = "2"
/// gap = "10px"
///
/// [[items]]
/// top = 0.0
/// height = 50.0
///
/// [button]
/// open_title = "Show more"
/// close_title = "Show less"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PanelFixture {
    /// Whether the wrapper contains an item container.
    #[serde(default = "default_true")]
    pub container: bool,
    /// `data-expand-height` on the wrapper.
    #[serde(default)]
    pub expand_height: Option<String>,
    /// Resolved `gap` of the item container.
    #[serde(default = "default_normal")]
    pub gap: String,
    /// Resolved `row-gap` of the item container.
    #[serde(default = "default_normal")]
    pub row_gap: String,
    /// Row items in document order.
    #[serde(default)]
    pub items: Vec<ItemRect>,
    /// Optional toggle control.
    #[serde(default)]
    pub button: Option<ButtonFixture>,
    /// Initial viewport scroll offset.
    #[serde(default)]
    pub scroll_y: Px,
}

impl PanelFixture {
    /// Parse a JSON fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Json`] on malformed input.
    pub fn from_json_str(s: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse a TOML fixture.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::Toml`] on malformed input.
    pub fn from_toml_str(s: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(s)?)
    }

    /// Load a fixture, choosing the format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an extension other
    /// than `.json`/`.toml`, or fails to parse.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match format.as_deref() {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            _ => Err(FixtureError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
