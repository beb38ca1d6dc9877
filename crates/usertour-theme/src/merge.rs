//! Deep merge of persisted (possibly partial) settings over the defaults.
//!
//! Persisted themes may predate fields that were later added to the
//! default tree. Merging guarantees every default field is present in the
//! effective settings.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::schema::{parse_u32, ThemeSettings};

/// Recursively merge `overrides` over `defaults`.
///
/// - Objects merge key by key.
/// - A leaf takes the override only when both sides are the same JSON kind;
///   otherwise the default is kept. A digit string over a number counts as
///   that number.
/// - `null` overrides count as absent.
/// - Arrays are replaced wholesale, never merged element-wise.
/// - Override keys unknown to `defaults` are carried through.
pub fn merge_value(defaults: &Value, overrides: &Value) -> Value {
    merge_at(defaults, overrides, "")
}

fn merge_at(defaults: &Value, overrides: &Value, path: &str) -> Value {
    match (defaults, overrides) {
        (_, Value::Null) => defaults.clone(),
        (Value::Null, _) => overrides.clone(),
        (Value::Object(base), Value::Object(patch)) => {
            let mut out: Map<String, Value> = base.clone();
            for (key, value) in patch {
                let child_path = join_path(path, key);
                let merged = match base.get(key) {
                    Some(default_child) => merge_at(default_child, value, &child_path),
                    None if value.is_null() => continue,
                    None => value.clone(),
                };
                out.insert(key.clone(), merged);
            }
            Value::Object(out)
        }
        _ if json_kind(defaults) == json_kind(overrides) => overrides.clone(),
        _ => match coerce_number(defaults, overrides) {
            Some(number) => number,
            None => {
                debug!(
                    path,
                    expected = json_kind(defaults),
                    found = json_kind(overrides),
                    "ignoring override with incompatible shape"
                );
                defaults.clone()
            }
        },
    }
}

/// `"12"` stored where the tree holds a number becomes `12`.
pub(crate) fn coerce_number(target: &Value, value: &Value) -> Option<Value> {
    match (target, value) {
        (Value::Number(_), Value::String(s)) => parse_u32(s).map(Value::from),
        _ => None,
    }
}

/// Merge a partial settings document over `defaults`, returning a complete tree.
///
/// Never fails: an override leaf whose merged value cannot be read back
/// (e.g. an unknown enum variant or a fractional width) is dropped in
/// favour of its default, and its siblings still apply.
pub fn merge_settings(defaults: &ThemeSettings, overrides: &Value) -> ThemeSettings {
    let base = defaults.to_value();
    let merged = merge_value(&base, overrides);
    match serde_json::from_value::<ThemeSettings>(merged) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("theme settings did not merge cleanly ({e}), merging leaf by leaf");
            merge_leafwise(defaults, base, overrides)
        }
    }
}

fn merge_leafwise(defaults: &ThemeSettings, mut base: Value, overrides: &Value) -> ThemeSettings {
    let mut leaves = Vec::new();
    collect_leaves(overrides, &mut Vec::new(), &mut leaves);
    for (path, value) in leaves {
        let patch = path
            .iter()
            .rev()
            .fold(value, |inner, key| Value::Object(Map::from_iter([(key.clone(), inner)])));
        let candidate = merge_value(&base, &patch);
        if serde_json::from_value::<ThemeSettings>(candidate.clone()).is_ok() {
            base = candidate;
        } else {
            warn!("dropping invalid settings value at '{}'", path.join("."));
        }
    }
    serde_json::from_value(base).unwrap_or_else(|_| defaults.clone())
}

/// Flatten an override document into `(path, leaf)` pairs. Empty objects
/// and `null` contribute nothing.
fn collect_leaves(value: &Value, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, Value)>) {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                collect_leaves(child, path, out);
                path.pop();
            }
        }
        leaf if !path.is_empty() => out.push((path.clone(), leaf.clone())),
        _ => {}
    }
}

impl ThemeSettings {
    /// Complete settings from a partial persisted document.
    pub fn from_partial(overrides: &Value) -> Self {
        merge_settings(&ThemeSettings::default(), overrides)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_owned()
    } else {
        format!("{parent}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Every leaf path of `defaults` must exist and be non-null in `merged`.
    fn assert_no_holes(defaults: &Value, merged: &Value, path: &str) {
        match defaults {
            Value::Object(map) => {
                for (k, v) in map {
                    let child = merged
                        .get(k)
                        .unwrap_or_else(|| panic!("hole at {}", join_path(path, k)));
                    assert_no_holes(v, child, &join_path(path, k));
                }
            }
            _ => assert!(!merged.is_null(), "null leaf at {path}"),
        }
    }

    #[test]
    fn empty_override_yields_defaults() {
        let defaults = ThemeSettings::default();
        assert_eq!(merge_settings(&defaults, &json!({})), defaults);
        assert_eq!(merge_settings(&defaults, &Value::Null), defaults);
    }

    #[test]
    fn override_wins_and_siblings_keep_defaults() {
        let defaults = ThemeSettings::default();
        let merged = merge_settings(&defaults, &json!({ "border": { "borderRadius": 12 } }));
        assert_eq!(merged.border.border_radius, 12);
        assert_eq!(
            merged.border.border_width_enabled,
            defaults.border.border_width_enabled
        );
        assert_eq!(merged.border.border_width, defaults.border.border_width);
        assert_eq!(merged.border.border_color, defaults.border.border_color);
        assert_eq!(merged.font, defaults.font);
    }

    #[test]
    fn merge_is_total_for_partial_documents() {
        let defaults = ThemeSettings::default();
        let overrides = [
            json!({}),
            json!({ "font": {} }),
            json!({ "buttons": { "primary": { "textColor": { "hover": "#000000" } } } }),
            json!({ "mainColor": null, "tooltip": { "width": null } }),
            json!({ "checklist": { "placement": { "position": "leftTop" } } }),
        ];
        let base = defaults.to_value();
        for o in &overrides {
            let merged = merge_settings(&defaults, o).to_value();
            assert_no_holes(&base, &merged, "");
        }
    }

    #[test]
    fn nested_override_precedence() {
        let merged = ThemeSettings::from_partial(&json!({
            "buttons": { "secondary": { "border": { "borderWidth": 3 } } },
            "brandColor": { "hover": "#111111" }
        }));
        assert_eq!(merged.buttons.secondary.border.border_width, 3);
        assert!(merged.buttons.secondary.border.enabled);
        assert_eq!(
            merged.brand_color.hover,
            crate::schema::ColorSlot::concrete("#111111")
        );
        assert!(merged.brand_color.active.is_auto());
    }

    #[test]
    fn incompatible_leaf_keeps_default() {
        let merged = ThemeSettings::from_partial(&json!({
            "font": { "fontSize": "large", "fontFamily": "Inter" }
        }));
        assert_eq!(merged.font.font_size, 16);
        assert_eq!(merged.font.font_family, "Inter");
    }

    #[test]
    fn invalid_enum_drops_only_that_leaf() {
        let merged = ThemeSettings::from_partial(&json!({
            "avatar": { "type": "hologram", "name": "sam" },
            "modal": { "width": 720 }
        }));
        assert_eq!(
            merged.avatar.avatar_type,
            crate::schema::AvatarSettings::default().avatar_type
        );
        assert_eq!(merged.avatar.name, "sam");
        assert_eq!(merged.modal.width, 720);
    }

    #[test]
    fn string_radius_overrides_numeric_default() {
        let merged = ThemeSettings::from_partial(&json!({ "border": { "borderRadius": "12" } }));
        let defaults = ThemeSettings::default();
        assert_eq!(defaults.border.border_radius, 8);
        assert_eq!(merged.border.border_radius, 12);
        assert_eq!(merged.border.border_width, defaults.border.border_width);
        assert_eq!(
            merged.border.border_width_enabled,
            defaults.border.border_width_enabled
        );
        assert_eq!(merged.border.border_color, defaults.border.border_color);
    }

    #[test]
    fn digit_string_is_coerced_but_words_are_not() {
        let defaults = json!({ "w": 8 });
        assert_eq!(merge_value(&defaults, &json!({ "w": "12" })), json!({ "w": 12 }));
        assert_eq!(merge_value(&defaults, &json!({ "w": "12px" })), json!({ "w": 8 }));
    }

    #[test]
    fn fractional_leaf_keeps_valid_siblings() {
        let merged = ThemeSettings::from_partial(&json!({
            "border": { "borderRadius": 12.5, "borderWidth": 3, "borderWidthEnabled": true }
        }));
        assert_eq!(merged.border.border_radius, 8);
        assert_eq!(merged.border.border_width, 3);
        assert!(merged.border.border_width_enabled);
    }

    #[test]
    fn negative_leaf_keeps_valid_siblings() {
        let merged = ThemeSettings::from_partial(&json!({
            "tooltip": { "width": -4, "notchSize": 14 },
            "font": { "fontFamily": "Inter" }
        }));
        assert_eq!(merged.tooltip.width, 300);
        assert_eq!(merged.tooltip.notch_size, 14);
        assert_eq!(merged.font.font_family, "Inter");
    }

    #[test]
    fn unknown_settings_keys_survive_merge() {
        let merged = ThemeSettings::from_partial(&json!({
            "tooltip": { "shadow": "0 4px 8px" },
            "newGroup": { "enabled": true }
        }));
        assert_eq!(merged.tooltip.width, 300);
        let value = merged.to_value();
        assert_eq!(value["tooltip"]["shadow"], "0 4px 8px");
        assert_eq!(value["newGroup"]["enabled"], true);
    }

    #[test]
    fn arrays_are_replaced_wholesale() {
        let defaults = json!({ "list": [1, 2, 3], "keep": true });
        let merged = merge_value(&defaults, &json!({ "list": [9] }));
        assert_eq!(merged, json!({ "list": [9], "keep": true }));
    }

    #[test]
    fn unknown_override_keys_are_carried_through() {
        let defaults = json!({ "a": 1 });
        let merged = merge_value(&defaults, &json!({ "b": "x", "c": null }));
        assert_eq!(merged, json!({ "a": 1, "b": "x" }));
    }

    #[test]
    fn object_over_scalar_keeps_default() {
        let defaults = json!({ "a": 1 });
        let merged = merge_value(&defaults, &json!({ "a": { "nested": true } }));
        assert_eq!(merged, json!({ "a": 1 }));
    }
}
