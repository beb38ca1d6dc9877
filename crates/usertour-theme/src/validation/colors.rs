//! Color field validation.

use usertour_common::FieldError;

use crate::schema::{ButtonStyle, ThemeSettings};

use super::helpers::{validate_literal, validate_slot};

pub(crate) fn validate_colors(errors: &mut Vec<FieldError>, prefix: &str, s: &ThemeSettings) {
    validate_literal(errors, prefix, "mainColor.background", &s.main_color.background);
    validate_literal(errors, prefix, "mainColor.color", &s.main_color.color);
    validate_slot(errors, prefix, "mainColor.hover", &s.main_color.hover);
    validate_slot(errors, prefix, "mainColor.active", &s.main_color.active);
    validate_literal(errors, prefix, "brandColor.background", &s.brand_color.background);
    validate_literal(errors, prefix, "brandColor.color", &s.brand_color.color);
    validate_slot(errors, prefix, "brandColor.hover", &s.brand_color.hover);
    validate_slot(errors, prefix, "brandColor.active", &s.brand_color.active);

    validate_slot(errors, prefix, "font.linkColor", &s.font.link_color);
    validate_slot(errors, prefix, "border.borderColor", &s.border.border_color);
    validate_button(errors, prefix, "buttons.primary", &s.buttons.primary);
    validate_button(errors, prefix, "buttons.secondary", &s.buttons.secondary);

    validate_slot(errors, prefix, "xbutton.color", &s.xbutton.color);
    validate_slot(errors, prefix, "progress.color", &s.progress.color);
    validate_slot(errors, prefix, "survey.color", &s.survey.color);
    validate_slot(errors, prefix, "launcherIcon.color", &s.launcher_icon.color);
    validate_slot(errors, prefix, "launcherBeacon.color", &s.launcher_beacon.color);
    validate_slot(errors, prefix, "checklist.checkmarkColor", &s.checklist.checkmark_color);

    let launcher = &s.checklist_launcher;
    validate_slot(errors, prefix, "checklistLauncher.color.color", &launcher.color.color);
    validate_slot(errors, prefix, "checklistLauncher.color.background", &launcher.color.background);
    validate_slot(errors, prefix, "checklistLauncher.color.hover", &launcher.color.hover);
    validate_slot(errors, prefix, "checklistLauncher.color.active", &launcher.color.active);
    validate_slot(errors, prefix, "checklistLauncher.counter.color", &launcher.counter.color);
    validate_slot(errors, prefix, "checklistLauncher.counter.background", &launcher.counter.background);

    validate_literal(errors, prefix, "backdrop.color", &s.backdrop.color);
    validate_slot(errors, prefix, "backdrop.highlight.color", &s.backdrop.highlight.color);
}

fn validate_button(errors: &mut Vec<FieldError>, prefix: &str, name: &str, b: &ButtonStyle) {
    let slots = [
        ("textColor.color", &b.text_color.color),
        ("textColor.hover", &b.text_color.hover),
        ("textColor.active", &b.text_color.active),
        ("backgroundColor.background", &b.background_color.background),
        ("backgroundColor.hover", &b.background_color.hover),
        ("backgroundColor.active", &b.background_color.active),
        ("border.color.color", &b.border.color.color),
        ("border.color.hover", &b.border.color.hover),
        ("border.color.active", &b.border.color.active),
    ];
    for (field, slot) in slots {
        validate_slot(errors, prefix, &format!("{name}.{field}"), slot);
    }
}
