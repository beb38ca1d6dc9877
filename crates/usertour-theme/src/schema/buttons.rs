//! Button geometry and per-variant styling.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{BackgroundStates, StateColors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonsSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub height: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub min_width: u32,
    /// Horizontal padding in px.
    #[serde(deserialize_with = "super::lenient_u32")]
    pub px: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_radius: u32,
    pub primary: ButtonStyle,
    pub secondary: ButtonStyle,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ButtonsSettings {
    fn default() -> Self {
        Self {
            height: 32,
            min_width: 80,
            px: 16,
            border_radius: 8,
            primary: ButtonStyle::default(),
            secondary: ButtonStyle {
                border: ButtonBorder {
                    enabled: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonStyle {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub font_weight: u32,
    pub text_color: StateColors,
    pub background_color: BackgroundStates,
    pub border: ButtonBorder,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            font_weight: 600,
            text_color: StateColors::default(),
            background_color: BackgroundStates::default(),
            border: ButtonBorder::default(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBorder {
    pub enabled: bool,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_width: u32,
    pub color: StateColors,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ButtonBorder {
    fn default() -> Self {
        Self {
            enabled: false,
            border_width: 1,
            color: StateColors::default(),
            extra: Map::new(),
        }
    }
}
