//! Checklist panel and its launcher button.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ColorSlot, Placement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub width: u32,
    pub placement: Placement,
    pub completed_task_text_decoration: String,
    pub checkmark_color: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ChecklistSettings {
    fn default() -> Self {
        Self {
            width: 360,
            placement: Placement::default(),
            completed_task_text_decoration: "line-through".into(),
            checkmark_color: ColorSlot::Auto,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChecklistLauncherSettings {
    #[serde(deserialize_with = "super::lenient_u32")]
    pub border_radius: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub height: u32,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub font_weight: u32,
    pub placement: Placement,
    pub color: LauncherButtonColors,
    pub counter: CounterColors,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ChecklistLauncherSettings {
    fn default() -> Self {
        Self {
            border_radius: 20,
            height: 60,
            font_weight: 600,
            placement: Placement::default(),
            color: LauncherButtonColors::default(),
            counter: CounterColors::default(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherButtonColors {
    pub color: ColorSlot,
    pub background: ColorSlot,
    pub hover: ColorSlot,
    pub active: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CounterColors {
    pub color: ColorSlot,
    pub background: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
