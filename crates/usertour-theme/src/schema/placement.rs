use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Screen corner a floating surface is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlacementPosition {
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
}

impl PlacementPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            PlacementPosition::LeftTop => "left-top",
            PlacementPosition::RightTop => "right-top",
            PlacementPosition::LeftBottom => "left-bottom",
            PlacementPosition::RightBottom => "right-bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Placement {
    pub position: PlacementPosition,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub position_offset_x: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub position_offset_y: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Placement {
    pub fn at(position: PlacementPosition) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: PlacementPosition::RightBottom,
            position_offset_x: 20,
            position_offset_y: 20,
            extra: Map::new(),
        }
    }
}
