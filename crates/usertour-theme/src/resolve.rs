//! Derived settings resolver.
//!
//! Replaces every `"Auto"` color slot with a concrete color computed from
//! the base palette. Resolution is a pure function of its input; slots that
//! already hold a literal are left untouched, so resolving twice is the
//! same as resolving once.

use tracing::debug;
use usertour_common::types::{mix, Color};

use crate::colors::parse_color;
use crate::schema::{ButtonStyle, ColorSlot, ThemeSettings};

/// Blend ratio toward the accent color for hover states.
pub const HOVER_RATIO: f64 = 0.1;
/// Blend ratio toward the accent color for active (pressed) states.
pub const ACTIVE_RATIO: f64 = 0.2;

/// Substitute for an unset or unparseable background color.
pub const NEUTRAL_BACKGROUND: &str = "#FFFFFF";
/// Substitute for an unset or unparseable foreground color.
pub const NEUTRAL_FOREGROUND: &str = "#313131";

/// Hover and active colors derived from one base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateMix {
    pub hover: Color,
    pub active: Color,
}

/// Blend `base` toward `toward` at the fixed hover and active ratios.
pub fn mix_states(base: Color, toward: Color) -> StateMix {
    StateMix {
        hover: mix(base, toward, HOVER_RATIO),
        active: mix(base, toward, ACTIVE_RATIO),
    }
}

/// A parsed base color together with the literal written back into slots.
#[derive(Debug, Clone)]
struct BaseColor {
    literal: String,
    color: Color,
}

impl BaseColor {
    fn new(value: &str, fallback: &str) -> Self {
        match parse_color(value) {
            Ok(color) => Self {
                literal: value.trim().to_owned(),
                color,
            },
            Err(_) => {
                debug!("base color '{value}' is unusable, falling back to {fallback}");
                Self {
                    literal: fallback.to_owned(),
                    color: Color::from_hex(fallback).unwrap_or(Color::WHITE),
                }
            }
        }
    }

    fn from_slot(slot: &ColorSlot, fallback: &BaseColor) -> Self {
        match slot.as_concrete() {
            Some(value) => match parse_color(value) {
                Ok(color) => Self {
                    literal: value.trim().to_owned(),
                    color,
                },
                Err(_) => fallback.clone(),
            },
            None => fallback.clone(),
        }
    }

    fn slot(&self) -> ColorSlot {
        ColorSlot::concrete(self.literal.clone())
    }
}

fn fill(slot: &mut ColorSlot, value: ColorSlot) {
    if slot.is_auto() {
        *slot = value;
    }
}

fn mixed(base: &BaseColor, toward: &BaseColor, ratio: f64) -> ColorSlot {
    ColorSlot::concrete(mix(base.color, toward.color, ratio).to_hex())
}

/// Resolve every `"Auto"` slot in `settings` into a concrete color.
pub fn resolve(settings: &ThemeSettings) -> ThemeSettings {
    let mut s = settings.clone();

    let main_bg = BaseColor::new(&s.main_color.background, NEUTRAL_BACKGROUND);
    let main_fg = BaseColor::new(&s.main_color.color, NEUTRAL_FOREGROUND);
    let brand_bg = BaseColor::new(&s.brand_color.background, NEUTRAL_BACKGROUND);
    let brand_fg = BaseColor::new(&s.brand_color.color, NEUTRAL_FOREGROUND);

    // Palette states first; everything below may reference them.
    fill(
        &mut s.main_color.hover,
        mixed(&main_bg, &brand_bg, HOVER_RATIO),
    );
    fill(
        &mut s.main_color.active,
        mixed(&main_bg, &brand_bg, ACTIVE_RATIO),
    );
    fill(
        &mut s.brand_color.hover,
        mixed(&brand_bg, &brand_fg, HOVER_RATIO),
    );
    fill(
        &mut s.brand_color.active,
        mixed(&brand_bg, &brand_fg, ACTIVE_RATIO),
    );

    let main_hover = BaseColor::from_slot(&s.main_color.hover, &main_bg);
    let main_active = BaseColor::from_slot(&s.main_color.active, &main_bg);
    let brand_hover = BaseColor::from_slot(&s.brand_color.hover, &brand_bg);
    let brand_active = BaseColor::from_slot(&s.brand_color.active, &brand_bg);

    fill(&mut s.font.link_color, brand_bg.slot());
    fill(
        &mut s.border.border_color,
        mixed(&main_bg, &main_fg, ACTIVE_RATIO),
    );

    resolve_button(
        &mut s.buttons.primary,
        ButtonPalette {
            text: &brand_fg,
            background: &brand_bg,
            hover: &brand_hover,
            active: &brand_active,
            border: &brand_bg,
        },
    );
    resolve_button(
        &mut s.buttons.secondary,
        ButtonPalette {
            text: &brand_bg,
            background: &main_bg,
            hover: &main_hover,
            active: &main_active,
            border: &brand_bg,
        },
    );

    fill(&mut s.xbutton.color, main_fg.slot());
    fill(&mut s.progress.color, brand_bg.slot());
    fill(&mut s.survey.color, brand_bg.slot());
    fill(&mut s.launcher_icon.color, brand_bg.slot());
    fill(&mut s.launcher_beacon.color, brand_bg.slot());
    fill(&mut s.checklist.checkmark_color, brand_bg.slot());
    fill(&mut s.backdrop.highlight.color, brand_bg.slot());

    let launcher = &mut s.checklist_launcher;
    fill(&mut launcher.color.color, brand_fg.slot());
    fill(&mut launcher.color.background, brand_bg.slot());
    let launcher_bg = BaseColor::from_slot(&launcher.color.background, &brand_bg);
    let launcher_fg = BaseColor::from_slot(&launcher.color.color, &brand_fg);
    fill(
        &mut launcher.color.hover,
        mixed(&launcher_bg, &launcher_fg, HOVER_RATIO),
    );
    fill(
        &mut launcher.color.active,
        mixed(&launcher_bg, &launcher_fg, ACTIVE_RATIO),
    );
    fill(&mut launcher.counter.color, brand_bg.slot());
    fill(&mut launcher.counter.background, brand_fg.slot());

    s
}

struct ButtonPalette<'a> {
    text: &'a BaseColor,
    background: &'a BaseColor,
    hover: &'a BaseColor,
    active: &'a BaseColor,
    border: &'a BaseColor,
}

fn resolve_button(style: &mut ButtonStyle, palette: ButtonPalette<'_>) {
    fill(&mut style.text_color.color, palette.text.slot());
    let text = BaseColor::from_slot(&style.text_color.color, palette.text);
    fill(&mut style.text_color.hover, text.slot());
    fill(&mut style.text_color.active, text.slot());

    fill(
        &mut style.background_color.background,
        palette.background.slot(),
    );
    fill(&mut style.background_color.hover, palette.hover.slot());
    fill(&mut style.background_color.active, palette.active.slot());

    fill(&mut style.border.color.color, palette.border.slot());
    let border = BaseColor::from_slot(&style.border.color.color, palette.border);
    fill(&mut style.border.color.hover, border.slot());
    fill(&mut style.border.color.active, border.slot());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_auto(settings: &ThemeSettings) -> bool {
        serde_json::to_string(settings).unwrap().contains("\"Auto\"")
    }

    #[test]
    fn main_hover_blends_toward_brand() {
        let mut s = ThemeSettings::default();
        s.main_color.background = "#FFFFFF".into();
        s.brand_color.background = "#0000FF".into();
        s.main_color.hover = ColorSlot::Auto;

        let resolved = resolve(&s);
        assert_eq!(resolved.main_color.hover, ColorSlot::concrete("#e6e6ff"));
        assert_eq!(resolved.main_color.active, ColorSlot::concrete("#ccccff"));
    }

    #[test]
    fn brand_states_blend_toward_brand_foreground() {
        let mut s = ThemeSettings::default();
        s.brand_color.background = "#000000".into();
        s.brand_color.color = "#FFFFFF".into();
        let resolved = resolve(&s);
        // 255 * 0.1 = 25.5 -> 26
        assert_eq!(resolved.brand_color.hover, ColorSlot::concrete("#1a1a1a"));
        // 255 * 0.2 = 51
        assert_eq!(resolved.brand_color.active, ColorSlot::concrete("#333333"));
    }

    #[test]
    fn resolve_leaves_no_auto_slots() {
        let resolved = resolve(&ThemeSettings::default());
        assert!(!contains_auto(&resolved));
    }

    #[test]
    fn resolve_is_idempotent() {
        let once = resolve(&ThemeSettings::default());
        let twice = resolve(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn resolve_is_deterministic() {
        let s = ThemeSettings::default();
        assert_eq!(resolve(&s), resolve(&s));
    }

    #[test]
    fn concrete_slots_are_preserved() {
        let mut s = ThemeSettings::default();
        s.main_color.hover = ColorSlot::concrete("#123456");
        s.buttons.primary.text_color.hover = ColorSlot::concrete("#abcdef");
        let resolved = resolve(&s);
        assert_eq!(resolved.main_color.hover, ColorSlot::concrete("#123456"));
        assert_eq!(
            resolved.buttons.primary.text_color.hover,
            ColorSlot::concrete("#abcdef")
        );
    }

    #[test]
    fn buttons_follow_palette() {
        let resolved = resolve(&ThemeSettings::default());
        let primary = &resolved.buttons.primary;
        assert_eq!(primary.text_color.color, ColorSlot::concrete("#FFFFFF"));
        assert_eq!(
            primary.background_color.background,
            ColorSlot::concrete("#2563EB")
        );
        assert_eq!(primary.background_color.hover, resolved.brand_color.hover);
        assert_eq!(primary.background_color.active, resolved.brand_color.active);

        let secondary = &resolved.buttons.secondary;
        assert_eq!(secondary.text_color.color, ColorSlot::concrete("#2563EB"));
        assert_eq!(
            secondary.background_color.background,
            ColorSlot::concrete("#FFFFFF")
        );
        assert_eq!(secondary.background_color.hover, resolved.main_color.hover);
    }

    #[test]
    fn explicit_button_text_drives_its_states() {
        let mut s = ThemeSettings::default();
        s.buttons.secondary.text_color.color = ColorSlot::concrete("#ff0000");
        let resolved = resolve(&s);
        assert_eq!(
            resolved.buttons.secondary.text_color.hover,
            ColorSlot::concrete("#ff0000")
        );
    }

    #[test]
    fn unusable_base_color_falls_back_to_neutral() {
        let mut s = ThemeSettings::default();
        s.brand_color.background = String::new();
        s.main_color.color = "not-a-color".into();
        let resolved = resolve(&s);
        assert_eq!(
            resolved.progress.color,
            ColorSlot::concrete(NEUTRAL_BACKGROUND)
        );
        assert_eq!(
            resolved.xbutton.color,
            ColorSlot::concrete(NEUTRAL_FOREGROUND)
        );
        assert!(!contains_auto(&resolved));
    }

    #[test]
    fn checklist_launcher_states_mix_its_own_colors() {
        let mut s = ThemeSettings::default();
        s.checklist_launcher.color.background = ColorSlot::concrete("#000000");
        s.checklist_launcher.color.color = ColorSlot::concrete("#FFFFFF");
        let resolved = resolve(&s);
        assert_eq!(
            resolved.checklist_launcher.color.hover,
            ColorSlot::concrete("#1a1a1a")
        );
        assert_eq!(
            resolved.checklist_launcher.color.active,
            ColorSlot::concrete("#333333")
        );
    }

    #[test]
    fn mix_states_uses_fixed_ratios() {
        let states = mix_states(Color::WHITE, Color::BLACK);
        assert_eq!(states.hover.to_hex(), "#e6e6e6");
        assert_eq!(states.active.to_hex(), "#cccccc");
    }
}
