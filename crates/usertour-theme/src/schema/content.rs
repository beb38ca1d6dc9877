//! Settings shared by content blocks: survey widgets, avatar, close button
//! and progress bar.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ColorSlot;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SurveySettings {
    pub color: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarType {
    None,
    Cartoon,
    Upload,
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AvatarSettings {
    #[serde(rename = "type")]
    pub avatar_type: AvatarType,
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub size: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AvatarSettings {
    fn default() -> Self {
        Self {
            avatar_type: AvatarType::Cartoon,
            name: "alex".into(),
            url: String::new(),
            size: 60,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XButtonSettings {
    pub color: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressType {
    FullWidth,
    Narrow,
    ChainRounded,
    ChainSquared,
    Dots,
    Numbered,
}

impl ProgressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressType::FullWidth => "full-width",
            ProgressType::Narrow => "narrow",
            ProgressType::ChainRounded => "chain-rounded",
            ProgressType::ChainSquared => "chain-squared",
            ProgressType::Dots => "dots",
            ProgressType::Numbered => "numbered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressSettings {
    pub enabled: bool,
    #[serde(rename = "type")]
    pub progress_type: ProgressType,
    pub color: ColorSlot,
    #[serde(deserialize_with = "super::lenient_u32")]
    pub height: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            progress_type: ProgressType::FullWidth,
            color: ColorSlot::Auto,
            height: 2,
            extra: Map::new(),
        }
    }
}
