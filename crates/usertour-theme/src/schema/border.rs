//! Card border settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ColorSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BorderSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_radius: u32,
    pub border_width_enabled: bool,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_width: u32,
    pub border_color: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BorderSettings {
    fn default() -> Self {
        Self {
            border_radius: 8,
            border_width_enabled: false,
            border_width: 1,
            border_color: ColorSlot::Auto,
            extra: Map::new(),
        }
    }
}
