//! Page backdrop and target highlight.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ColorSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightType {
    Inside,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropSettings {
    pub color: String,
    /// Percentage (valid range: 0-100).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub opacity: u32,
    pub highlight: HighlightSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BackdropSettings {
    fn default() -> Self {
        Self {
            color: "#020617".into(),
            opacity: 40,
            highlight: HighlightSettings::default(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightSettings {
    #[serde(rename = "type")]
    pub highlight_type: HighlightType,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub radius: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub spread: u32,
    pub color: ColorSlot,
    /// Percentage (valid range: 0-100).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub opacity: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            highlight_type: HighlightType::Outside,
            radius: 4,
            spread: 0,
            color: ColorSlot::Auto,
            opacity: 0,
            extra: Map::new(),
        }
    }
}
