//! Theme settings tree.
//!
//! Every group derives `serde(default)` so a partial settings document
//! deserializes into a complete tree. The `Default` impls are the global
//! defaults every theme is merged over.

mod backdrop;
mod border;
mod buttons;
mod checklist;
mod color;
mod content;
mod font;
mod launcher;
mod numeric;
mod placement;
mod popups;

pub use backdrop::*;
pub use border::*;
pub use buttons::*;
pub use checklist::*;
pub use color::*;
pub use content::*;
pub use font::*;
pub use launcher::*;
pub use numeric::parse_u32;
pub use placement::*;
pub use popups::*;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use numeric::lenient_u32;

/// Root of the styling tree shared by a theme and each of its variations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    pub main_color: MainColor,
    pub brand_color: BrandColor,
    pub font: FontSettings,
    pub border: BorderSettings,
    pub buttons: ButtonsSettings,
    pub tooltip: TooltipSettings,
    pub modal: ModalSettings,
    pub checklist: ChecklistSettings,
    pub checklist_launcher: ChecklistLauncherSettings,
    pub launcher_icon: LauncherIconSettings,
    pub launcher_beacon: LauncherBeaconSettings,
    pub backdrop: BackdropSettings,
    pub survey: SurveySettings,
    pub avatar: AvatarSettings,
    pub xbutton: XButtonSettings,
    pub progress: ProgressSettings,
    pub bubble: BubbleSettings,
    pub focus_highlight: FocusHighlightSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeSettings {
    /// JSON view of the tree, keyed by wire (camelCase) names.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette() {
        let s = ThemeSettings::default();
        assert_eq!(s.main_color.background, "#FFFFFF");
        assert_eq!(s.main_color.color, "#313131");
        assert!(s.main_color.hover.is_auto());
        assert_eq!(s.brand_color.background, "#2563EB");
        assert_eq!(s.brand_color.color, "#FFFFFF");
        assert!(s.brand_color.active.is_auto());
    }

    #[test]
    fn default_geometry() {
        let s = ThemeSettings::default();
        assert_eq!(s.border.border_radius, 8);
        assert!(!s.border.border_width_enabled);
        assert_eq!(s.font.font_size, 16);
        assert_eq!(s.buttons.height, 32);
        assert_eq!(s.tooltip.width, 300);
        assert_eq!(s.modal.width, 600);
        assert_eq!(s.checklist.width, 360);
        assert_eq!(s.backdrop.opacity, 40);
        assert!(s.progress.enabled);
    }

    #[test]
    fn secondary_button_has_border_by_default() {
        let s = ThemeSettings::default();
        assert!(!s.buttons.primary.border.enabled);
        assert!(s.buttons.secondary.border.enabled);
    }

    #[test]
    fn serializes_with_camel_case_group_names() {
        let value = ThemeSettings::default().to_value();
        for key in [
            "mainColor",
            "brandColor",
            "font",
            "border",
            "buttons",
            "tooltip",
            "modal",
            "checklist",
            "checklistLauncher",
            "launcherIcon",
            "launcherBeacon",
            "backdrop",
            "survey",
            "avatar",
            "xbutton",
            "progress",
            "bubble",
            "focusHighlight",
        ] {
            assert!(value.get(key).is_some(), "missing group {key}");
        }
        assert_eq!(value["border"]["borderRadius"], 8);
        assert_eq!(value["mainColor"]["hover"], "Auto");
        assert_eq!(value["avatar"]["type"], "cartoon");
        assert_eq!(value["progress"]["type"], "full-width");
        assert_eq!(value["backdrop"]["highlight"]["type"], "outside");
    }

    #[test]
    fn partial_document_fills_defaults() {
        let s: ThemeSettings = serde_json::from_str(
            r##"{ "border": { "borderRadius": 12 }, "font": { "fontFamily": "Inter" } }"##,
        )
        .unwrap();
        assert_eq!(s.border.border_radius, 12);
        assert_eq!(s.border.border_width, 1);
        assert_eq!(s.font.font_family, "Inter");
        assert_eq!(s.font.font_size, 16);
        assert_eq!(s.modal, ModalSettings::default());
    }

    #[test]
    fn color_slot_wire_format() {
        let auto: ColorSlot = serde_json::from_str("\"Auto\"").unwrap();
        assert_eq!(auto, ColorSlot::Auto);

        let literal: ColorSlot = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(literal, ColorSlot::concrete("#ff0000"));
        assert_eq!(literal.as_concrete(), Some("#ff0000"));

        assert_eq!(serde_json::to_string(&ColorSlot::Auto).unwrap(), "\"Auto\"");
        assert_eq!(
            serde_json::to_string(&ColorSlot::concrete("#123456")).unwrap(),
            "\"#123456\""
        );
    }

    #[test]
    fn color_slot_auto_is_case_sensitive() {
        assert_eq!(ColorSlot::from("auto"), ColorSlot::concrete("auto"));
    }

    #[test]
    fn concrete_auto_literal_is_auto() {
        assert_eq!(ColorSlot::concrete("Auto"), ColorSlot::Auto);
        let json = serde_json::to_string(&ColorSlot::concrete("Auto")).unwrap();
        let back: ColorSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorSlot::concrete("Auto"));
    }

    #[test]
    fn geometry_accepts_digit_strings() {
        let s: ThemeSettings = serde_json::from_value(serde_json::json!({
            "border": { "borderRadius": "12", "borderWidth": " 2 " },
            "tooltip": { "width": 420 }
        }))
        .unwrap();
        assert_eq!(s.border.border_radius, 12);
        assert_eq!(s.border.border_width, 2);
        assert_eq!(s.tooltip.width, 420);
    }

    #[test]
    fn geometry_rejects_fractions_and_negatives() {
        for bad in [
            serde_json::json!({ "border": { "borderRadius": 12.5 } }),
            serde_json::json!({ "border": { "borderRadius": -4 } }),
            serde_json::json!({ "border": { "borderRadius": "wide" } }),
        ] {
            assert!(serde_json::from_value::<ThemeSettings>(bad).is_err());
        }
    }

    #[test]
    fn unknown_keys_are_kept_in_extra() {
        let s: ThemeSettings = serde_json::from_value(serde_json::json!({
            "tooltip": { "width": 320, "shadow": "0 2px 4px" },
            "newGroup": { "enabled": true }
        }))
        .unwrap();
        assert_eq!(s.tooltip.extra["shadow"], "0 2px 4px");
        assert_eq!(s.extra["newGroup"]["enabled"], true);

        let value = s.to_value();
        assert_eq!(value["tooltip"]["shadow"], "0 2px 4px");
        assert_eq!(value["newGroup"], serde_json::json!({ "enabled": true }));
    }

    #[test]
    fn default_settings_round_trip_through_json() {
        let s = ThemeSettings::default();
        let json = serde_json::to_string(&s).unwrap();
        let back: ThemeSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
