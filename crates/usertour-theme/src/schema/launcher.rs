//! Launcher icon and beacon settings.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ColorSlot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherIconSettings {
    pub color: ColorSlot,
    /// Percentage (valid range: 0-100).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub opacity: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub size: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LauncherIconSettings {
    fn default() -> Self {
        Self {
            color: ColorSlot::Auto,
            opacity: 100,
            size: 16,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherBeaconSettings {
    pub color: ColorSlot,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub size: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LauncherBeaconSettings {
    fn default() -> Self {
        Self {
            color: ColorSlot::Auto,
            size: 16,
            extra: Map::new(),
        }
    }
}
