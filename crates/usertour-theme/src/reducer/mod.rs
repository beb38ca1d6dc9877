//! Single reducer for editing a settings tree.
//!
//! Every editor control dispatches a [`SettingsAction`] addressed by a
//! dotted wire path (e.g. `buttons.primary.textColor.hover`) instead of
//! owning a bespoke updater for its group.

mod path;


use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use usertour_common::ThemeError;

use crate::merge::{coerce_number, json_kind, merge_value};
use crate::schema::ThemeSettings;
use path::{check_shape, lookup, lookup_mut, segments};

/// An edit to a settings tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SettingsAction {
    /// Deep-merge an object into the group at `path` (empty path = root).
    Patch { path: String, value: Value },
    /// Replace a single leaf.
    Set { path: String, value: Value },
    /// Restore the default value at `path`.
    ResetGroup { path: String },
    ResetAll,
}

impl SettingsAction {
    pub fn patch(path: impl Into<String>, value: Value) -> Self {
        SettingsAction::Patch {
            path: path.into(),
            value,
        }
    }

    pub fn set(path: impl Into<String>, value: impl Into<Value>) -> Self {
        SettingsAction::Set {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn reset(path: impl Into<String>) -> Self {
        SettingsAction::ResetGroup { path: path.into() }
    }

    /// Human-readable label for logs and undo history.
    pub fn label(&self) -> String {
        match self {
            SettingsAction::Patch { path, .. } => format!("Edit {}", display_path(path)),
            SettingsAction::Set { path, .. } => format!("Set {}", display_path(path)),
            SettingsAction::ResetGroup { path } => format!("Reset {}", display_path(path)),
            SettingsAction::ResetAll => "Reset all settings".into(),
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "settings"
    } else {
        path
    }
}

/// Apply `action` to `settings`, returning the new tree.
///
/// On error the input is untouched and no partial edit is applied.
pub fn reduce(settings: &ThemeSettings, action: &SettingsAction) -> Result<ThemeSettings, ThemeError> {
    debug!(action = %action.label(), "reducing theme settings");
    match action {
        SettingsAction::ResetAll => Ok(ThemeSettings::default()),
        SettingsAction::ResetGroup { path } if segments(path).is_empty() => {
            Ok(ThemeSettings::default())
        }
        SettingsAction::ResetGroup { path } => {
            let defaults = ThemeSettings::default().to_value();
            let default_value = lookup(&defaults, path)
                .ok_or_else(|| ThemeError::InvalidPath(path.clone()))?
                .clone();
            let mut current = settings.to_value();
            let target = lookup_mut(&mut current, path)
                .ok_or_else(|| ThemeError::InvalidPath(path.clone()))?;
            *target = default_value;
            read_back(current, path)
        }
        SettingsAction::Set { path, value } => {
            let mut current = settings.to_value();
            let target = lookup_mut(&mut current, path)
                .filter(|_| !segments(path).is_empty())
                .ok_or_else(|| ThemeError::InvalidPath(path.clone()))?;
            let value = coerce_number(target, value).unwrap_or_else(|| value.clone());
            if target.is_object() || json_kind(target) != json_kind(&value) {
                return Err(ThemeError::TypeMismatch {
                    path: path.clone(),
                    expected: json_kind(target).into(),
                });
            }
            *target = value;
            read_back(current, path)
        }
        SettingsAction::Patch { path, value } => {
            let mut current = settings.to_value();
            let target = lookup_mut(&mut current, path)
                .ok_or_else(|| ThemeError::InvalidPath(path.clone()))?;
            if !target.is_object() || !value.is_object() {
                return Err(ThemeError::TypeMismatch {
                    path: path.clone(),
                    expected: "object".into(),
                });
            }
            check_shape(target, value, path)?;
            *target = merge_value(target, value);
            read_back(current, path)
        }
    }
}

fn read_back(value: Value, path: &str) -> Result<ThemeSettings, ThemeError> {
    serde_json::from_value(value).map_err(|e| ThemeError::TypeMismatch {
        path: path.to_owned(),
        expected: format!("a valid value ({e})"),
    })
}
