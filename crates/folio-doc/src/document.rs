//! The portfolio document: ordered sections plus theme and preview state.

use serde::{Deserialize, Serialize};

use crate::section::Section;

/// Errors that can occur when decoding or encoding a portfolio document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid portfolio document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewport the live preview frames the document in. Never exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// Editor chrome colors. Sections carry their own presentation, so only
/// `dark_mode` reaches the exported artifact (it picks the body palette).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub dark_mode: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            secondary_color: "#1e40af".to_string(),
            dark_mode: false,
        }
    }
}

impl Theme {
    /// Shallow-merge `patch` over this theme.
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(color) = patch.primary_color {
            self.primary_color = color;
        }
        if let Some(color) = patch.secondary_color {
            self.secondary_color = color;
        }
        if let Some(dark) = patch.dark_mode {
            self.dark_mode = dark;
        }
    }
}

/// Partial theme update; absent fields leave the theme untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

/// The root document of one editing session.
///
/// Section order is the render and export order; there is no separate
/// priority field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Portfolio {
    pub sections: Vec<Section>,
    pub theme: Theme,
    pub preview_device: DeviceType,
}

impl Portfolio {
    /// An empty portfolio with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a portfolio from its JSON document form.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this portfolio as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
