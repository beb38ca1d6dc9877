//! Typography settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ColorSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSettings {
    pub font_family: String,
    /// Body font size in px (valid range: 8-72).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub font_size: u32,
    /// Line height in px (valid range: 8-96).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub line_height: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub font_weight_normal: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub font_weight_bold: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub h1_font_size: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub h2_font_size: u32,
    pub link_color: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            font_family: "System font".into(),
            font_size: 16,
            line_height: 24,
            font_weight_normal: 400,
            font_weight_bold: 600,
            h1_font_size: 24,
            h2_font_size: 20,
            link_color: ColorSlot::Auto,
            extra: Map::new(),
        }
    }
}
