//! Numeric range validation for sizes, weights and opacities.

use usertour_common::FieldError;

use crate::schema::ThemeSettings;

use super::helpers::validate_range;

pub(crate) fn validate_geometry(errors: &mut Vec<FieldError>, prefix: &str, s: &ThemeSettings) {
    validate_range(errors, prefix, "font.fontSize", s.font.font_size, 8, 72);
    validate_range(errors, prefix, "font.lineHeight", s.font.line_height, 8, 96);
    validate_range(errors, prefix, "font.h1FontSize", s.font.h1_font_size, 8, 96);
    validate_range(errors, prefix, "font.h2FontSize", s.font.h2_font_size, 8, 96);
    validate_range(errors, prefix, "font.fontWeightNormal", s.font.font_weight_normal, 100, 900);
    validate_range(errors, prefix, "font.fontWeightBold", s.font.font_weight_bold, 100, 900);

    validate_range(errors, prefix, "border.borderRadius", s.border.border_radius, 0, 100);
    validate_range(errors, prefix, "border.borderWidth", s.border.border_width, 0, 20);

    validate_range(errors, prefix, "buttons.height", s.buttons.height, 16, 96);
    validate_range(errors, prefix, "buttons.borderRadius", s.buttons.border_radius, 0, 100);
    validate_range(errors, prefix, "buttons.primary.fontWeight", s.buttons.primary.font_weight, 100, 900);
    validate_range(errors, prefix, "buttons.secondary.fontWeight", s.buttons.secondary.font_weight, 100, 900);

    validate_range(errors, prefix, "tooltip.width", s.tooltip.width, 100, 1000);
    validate_range(errors, prefix, "tooltip.notchSize", s.tooltip.notch_size, 0, 50);
    validate_range(errors, prefix, "modal.width", s.modal.width, 200, 1600);
    validate_range(errors, prefix, "modal.padding", s.modal.padding, 0, 200);
    validate_range(errors, prefix, "checklist.width", s.checklist.width, 200, 1000);

    validate_range(errors, prefix, "launcherIcon.opacity", s.launcher_icon.opacity, 0, 100);
    validate_range(errors, prefix, "backdrop.opacity", s.backdrop.opacity, 0, 100);
    validate_range(errors, prefix, "backdrop.highlight.opacity", s.backdrop.highlight.opacity, 0, 100);
    validate_range(errors, prefix, "progress.height", s.progress.height, 1, 40);
}
