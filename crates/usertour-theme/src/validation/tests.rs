//! Tests for the full validation pipeline.

use super::*;
use crate::entity::{RulesCondition, RulesOperator, ThemeVariation};
use crate::schema::*;

fn field_names(err: ThemeError) -> Vec<String> {
    match err {
        ThemeError::Validation(errors) => errors.into_iter().map(|e| e.field).collect(),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn default_settings_validate() {
    assert!(validate_settings(&ThemeSettings::default()).is_ok());
}

#[test]
fn catches_font_size_out_of_range() {
    let mut s = ThemeSettings::default();
    s.font.font_size = 5;
    let err = validate_settings(&s).unwrap_err().to_string();
    assert!(err.contains("font.fontSize"));
    assert!(err.contains("[8, 72]"));
}

#[test]
fn catches_tooltip_and_modal_width() {
    let mut s = ThemeSettings::default();
    s.tooltip.width = 50;
    s.modal.width = 5000;
    let fields = field_names(validate_settings(&s).unwrap_err());
    assert_eq!(fields, vec!["tooltip.width", "modal.width"]);
}

#[test]
fn catches_opacity_over_hundred() {
    let mut s = ThemeSettings::default();
    s.backdrop.opacity = 140;
    let fields = field_names(validate_settings(&s).unwrap_err());
    assert_eq!(fields, vec!["backdrop.opacity"]);
}

#[test]
fn boundaries_are_inclusive() {
    let mut s = ThemeSettings::default();
    s.font.font_size = 8;
    s.border.border_radius = 100;
    s.launcher_icon.opacity = 0;
    s.buttons.height = 96;
    assert!(validate_settings(&s).is_ok());
}

#[test]
fn catches_bad_literal_colors() {
    let mut s = ThemeSettings::default();
    s.brand_color.background = "blue-ish".into();
    s.buttons.primary.background_color.hover = ColorSlot::concrete("#12");
    let fields = field_names(validate_settings(&s).unwrap_err());
    assert_eq!(
        fields,
        vec!["brandColor.background", "buttons.primary.backgroundColor.hover"]
    );
}

#[test]
fn auto_slots_are_valid() {
    let mut s = ThemeSettings::default();
    s.survey.color = ColorSlot::Auto;
    s.checklist.checkmark_color = ColorSlot::concrete("rgba(0, 0, 0, 0.5)");
    assert!(validate_settings(&s).is_ok());
}

#[test]
fn avatar_url_checked_only_for_url_type() {
    let mut s = ThemeSettings::default();
    s.avatar.url = "not a url".into();
    assert!(validate_settings(&s).is_ok());

    s.avatar.avatar_type = AvatarType::Url;
    let fields = field_names(validate_settings(&s).unwrap_err());
    assert_eq!(fields, vec!["avatar.url"]);

    s.avatar.url = "https://cdn.example.com/avatar.png".into();
    assert!(validate_settings(&s).is_ok());
}

#[test]
fn avatar_url_requires_http_scheme() {
    assert!(validate_avatar_url("http://example.com/a.png").is_ok());
    assert!(validate_avatar_url("ftp://example.com/a.png").is_err());
    assert!(validate_avatar_url("https://").is_err());
    assert!(validate_avatar_url("").is_err());
}

#[test]
fn target_tolerance_capped() {
    assert!(validate_target_tolerance(0).is_ok());
    assert!(validate_target_tolerance(MAX_TARGET_TOLERANCE_SECS).is_ok());
    let err = validate_target_tolerance(11).unwrap_err();
    assert_eq!(err.field, "tolerance");
}

#[test]
fn collects_every_problem_at_once() {
    let mut s = ThemeSettings::default();
    s.font.font_size = 200;
    s.font.line_height = 1;
    s.buttons.height = 4;
    s.main_color.color = "??".into();
    let fields = field_names(validate_settings(&s).unwrap_err());
    assert_eq!(fields.len(), 4);
}

#[test]
fn theme_errors_are_prefixed() {
    let mut theme = crate::entity::Theme::new("  ");
    theme.settings.modal.width = 10;
    let mut bad = ThemeSettings::default();
    bad.tooltip.width = 2;
    theme.variations.push(ThemeVariation {
        id: "v1".into(),
        name: "Dark".into(),
        conditions: vec![RulesCondition::group(RulesOperator::Or, vec![])],
        settings: bad,
    });
    theme.variations.push(ThemeVariation {
        id: "v2".into(),
        name: String::new(),
        conditions: vec![],
        settings: ThemeSettings::default(),
    });

    let fields = field_names(validate_theme(&theme).unwrap_err());
    assert_eq!(
        fields,
        vec![
            "name",
            "settings.modal.width",
            "variations[0].settings.tooltip.width",
            "variations[1].name",
            "variations[1].conditions",
        ]
    );
}

#[test]
fn default_theme_validates() {
    assert!(validate_theme(&crate::entity::Theme::new("Default")).is_ok());
}

#[test]
fn theme_name_must_not_be_blank() {
    assert!(validate_theme_name("Ocean").is_ok());
    let err = validate_theme_name(" \t").unwrap_err();
    assert_eq!(err.to_string(), "name: Theme name is required");
}
