//! Persisted theme entities.
//!
//! Settings trees are always read through the default merge, so documents
//! written by older versions (missing fields) load into complete trees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use usertour_common::ThemeId;

use crate::schema::ThemeSettings;

fn deserialize_settings<'de, D: Deserializer<'de>>(d: D) -> Result<ThemeSettings, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(ThemeSettings::from_partial(&value))
}

/// A named, persisted bundle of styling settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default, deserialize_with = "deserialize_settings")]
    pub settings: ThemeSettings,
    #[serde(default)]
    pub variations: Vec<ThemeVariation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Theme {
    /// A new user theme cloned from the global defaults.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_settings(name, ThemeSettings::default())
    }

    pub fn with_settings(name: impl Into<String>, settings: ThemeSettings) -> Self {
        Self {
            id: ThemeId::new(),
            name: name.into(),
            is_default: false,
            is_system: false,
            settings,
            variations: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// System themes cannot be edited or deleted from the console.
    pub fn is_editable(&self) -> bool {
        !self.is_system
    }
}

/// A conditional override of a theme's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeVariation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<RulesCondition>,
    #[serde(default, deserialize_with = "deserialize_settings")]
    pub settings: ThemeSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesOperator {
    And,
    Or,
}

/// A node of the audience rule tree.
///
/// Owned by the rule editor; this crate stores and passes it through
/// without interpreting it. Unknown fields survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operators: Option<RulesOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<RulesCondition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RulesCondition {
    /// Leaf predicate of the given type.
    pub fn leaf(kind: impl Into<String>, data: Value) -> Self {
        Self {
            id: None,
            kind: kind.into(),
            operators: None,
            data: Some(data),
            conditions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Group node combining `conditions` with `operator`.
    pub fn group(operator: RulesOperator, conditions: Vec<RulesCondition>) -> Self {
        Self {
            id: None,
            kind: "group".into(),
            operators: Some(operator),
            data: None,
            conditions,
            extra: Map::new(),
        }
    }
}
