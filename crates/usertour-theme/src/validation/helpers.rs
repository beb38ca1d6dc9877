//! Shared helpers used by all area validators.

use usertour_common::FieldError;

use crate::colors::validate_color;
use crate::merge::join_path;
use crate::schema::ColorSlot;

pub(crate) fn field(prefix: &str, name: &str) -> String {
    join_path(prefix, name)
}

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(
    errors: &mut Vec<FieldError>,
    prefix: &str,
    name: &str,
    value: u32,
    min: u32,
    max: u32,
) {
    if value < min || value > max {
        errors.push(FieldError::new(
            field(prefix, name),
            format!("{value} is out of range [{min}, {max}]"),
        ));
    }
}

/// Push an error if a literal base color does not parse.
pub(crate) fn validate_literal(errors: &mut Vec<FieldError>, prefix: &str, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(FieldError::new(
            field(prefix, name),
            format!("Invalid color: '{value}'"),
        ));
    }
}

/// Push an error if a concrete color slot does not parse. `Auto` is always valid.
pub(crate) fn validate_slot(errors: &mut Vec<FieldError>, prefix: &str, name: &str, slot: &ColorSlot) {
    if let Some(value) = slot.as_concrete() {
        validate_literal(errors, prefix, name, value);
    }
}
