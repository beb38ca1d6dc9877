//! Tooltip, modal, speech bubble and focus-highlight geometry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Placement, PlacementPosition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipSettings {
    /// Width in px (valid range: 100-1000).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub width: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub notch_size: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            width: 300,
            notch_size: 20,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalSettings {
    /// Width in px (valid range: 200-1600).
    #[serde(deserialize_with = "super::lenient_u32")]
    pub width: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub padding: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            width: 600,
            padding: 40,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BubbleSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub width: u32,
    pub placement: Placement,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            width: 300,
            placement: Placement::at(PlacementPosition::LeftBottom),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusHighlightSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_radius: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub spread: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for FocusHighlightSettings {
    fn default() -> Self {
        Self {
            border_radius: 4,
            spread: 3,
            extra: Map::new(),
        }
    }
}
