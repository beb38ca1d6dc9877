//! Avatar and content-block input checks.

use regex::Regex;
use std::sync::LazyLock;
use usertour_common::FieldError;

use crate::schema::{AvatarType, ThemeSettings};

use super::helpers::field;

/// Upper bound for how long a tooltip waits for its target element.
pub const MAX_TARGET_TOLERANCE_SECS: u32 = 10;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").unwrap());

/// Check an avatar image URL.
pub fn validate_avatar_url(url: &str) -> Result<(), FieldError> {
    if URL_RE.is_match(url.trim()) {
        Ok(())
    } else {
        Err(FieldError::new("avatar.url", "Invalid URL"))
    }
}

/// Check the target-wait tolerance entered in the tooltip editor.
pub fn validate_target_tolerance(secs: u32) -> Result<(), FieldError> {
    if secs > MAX_TARGET_TOLERANCE_SECS {
        return Err(FieldError::new(
            "tolerance",
            format!("Tolerance must be at most {MAX_TARGET_TOLERANCE_SECS} seconds"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_avatar(errors: &mut Vec<FieldError>, prefix: &str, s: &ThemeSettings) {
    if s.avatar.avatar_type == AvatarType::Url {
        if let Err(mut e) = validate_avatar_url(&s.avatar.url) {
            e.field = field(prefix, &e.field);
            errors.push(e);
        }
    }
}
