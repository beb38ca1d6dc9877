//! Local, synchronous validation of theme drafts.
//!
//! Each area has its own submodule; this orchestrator calls them all and
//! collects every problem into a single `ThemeError::Validation`, so the
//! editor can show all inline messages at once.

mod colors;
mod content;
mod geometry;
mod helpers;

#[cfg(test)]
mod tests;

pub use content::{
    validate_avatar_url, validate_target_tolerance, MAX_TARGET_TOLERANCE_SECS,
};

use usertour_common::{FieldError, ThemeError};

use crate::entity::Theme;
use crate::schema::ThemeSettings;

/// Collect every problem in a settings tree, prefixing fields with `prefix`.
pub(crate) fn collect_settings_errors(
    errors: &mut Vec<FieldError>,
    prefix: &str,
    settings: &ThemeSettings,
) {
    colors::validate_colors(errors, prefix, settings);
    geometry::validate_geometry(errors, prefix, settings);
    content::validate_avatar(errors, prefix, settings);
}

/// Validate a settings tree.
pub fn validate_settings(settings: &ThemeSettings) -> Result<(), ThemeError> {
    let mut errors = Vec::new();
    collect_settings_errors(&mut errors, "", settings);
    finish(errors)
}

/// A theme name must contain something other than whitespace.
pub fn validate_theme_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::new("name", "Theme name is required"));
    }
    Ok(())
}

/// Validate a theme: its name, base settings and every variation's settings.
///
/// Variation name/condition rules are enforced by the variation dialog and
/// are checked here too so a persisted theme can never carry an unnamed one.
pub fn validate_theme(theme: &Theme) -> Result<(), ThemeError> {
    let mut errors = Vec::new();
    if let Err(e) = validate_theme_name(&theme.name) {
        errors.push(e);
    }
    collect_settings_errors(&mut errors, "settings", &theme.settings);
    for (i, variation) in theme.variations.iter().enumerate() {
        let prefix = format!("variations[{i}]");
        if variation.name.trim().is_empty() {
            errors.push(FieldError::new(
                format!("{prefix}.name"),
                usertour_common::VariationError::NameRequired.to_string(),
            ));
        }
        if variation.conditions.is_empty() {
            errors.push(FieldError::new(
                format!("{prefix}.conditions"),
                usertour_common::VariationError::ConditionRequired.to_string(),
            ));
        }
        collect_settings_errors(&mut errors, &format!("{prefix}.settings"), &variation.settings);
    }
    finish(errors)
}

fn finish(errors: Vec<FieldError>) -> Result<(), ThemeError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ThemeError::Validation(errors))
    }
}
