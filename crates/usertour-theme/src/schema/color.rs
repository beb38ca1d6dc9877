//! Base palette groups and the `"Auto"` color slot.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Wire value of [`ColorSlot::Auto`].
pub const AUTO: &str = "Auto";

/// A color that is either stored literally or derived from the base palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ColorSlot {
    #[default]
    Auto,
    Concrete(String),
}

impl ColorSlot {
    /// A literal color. The wire literal `"Auto"` maps to [`ColorSlot::Auto`].
    pub fn concrete(color: impl Into<String>) -> Self {
        let color = color.into();
        if color == AUTO {
            ColorSlot::Auto
        } else {
            ColorSlot::Concrete(color)
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, ColorSlot::Auto)
    }

    pub fn as_concrete(&self) -> Option<&str> {
        match self {
            ColorSlot::Auto => None,
            ColorSlot::Concrete(c) => Some(c),
        }
    }
}

impl From<&str> for ColorSlot {
    fn from(s: &str) -> Self {
        ColorSlot::concrete(s)
    }
}

impl Serialize for ColorSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorSlot::Auto => serializer.serialize_str(AUTO),
            ColorSlot::Concrete(c) => serializer.serialize_str(c),
        }
    }
}

impl<'de> Deserialize<'de> for ColorSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ColorSlot::concrete)
    }
}

/// Neutral surface palette (card background and body text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MainColor {
    pub background: String,
    pub color: String,
    pub hover: ColorSlot,
    pub active: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for MainColor {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".into(),
            color: "#313131".into(),
            hover: ColorSlot::Auto,
            active: ColorSlot::Auto,
            extra: Map::new(),
        }
    }
}

/// Brand palette used for primary buttons and accents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrandColor {
    pub background: String,
    pub color: String,
    pub hover: ColorSlot,
    pub active: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BrandColor {
    fn default() -> Self {
        Self {
            background: "#2563EB".into(),
            color: "#FFFFFF".into(),
            hover: ColorSlot::Auto,
            active: ColorSlot::Auto,
            extra: Map::new(),
        }
    }
}

/// Foreground color with interaction states.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StateColors {
    pub color: ColorSlot,
    pub hover: ColorSlot,
    pub active: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Background color with interaction states.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundStates {
    pub background: ColorSlot,
    pub hover: ColorSlot,
    pub active: ColorSlot,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
