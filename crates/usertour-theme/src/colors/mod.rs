//! Color parsing and validation for theme color fields.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` and
//! `rgba(r,g,b,a)`. In the `rgba()` format the alpha component may be
//! either 0-255 (integer) or 0.0-1.0 (float), matching CSS conventions.

mod parse;


use usertour_common::types::Color;
use usertour_common::ThemeError;

use parse::{parse_hex, parse_rgb, HEX_RE, RGB_RE};

/// Parse a color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s).ok_or_else(|| ThemeError::Parse(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgb(s).ok_or_else(|| ThemeError::Parse(format!("invalid rgba color: {s}")));
    }

    Err(ThemeError::Parse(format!("unrecognized color format: {s}")))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() {
        return false;
    }
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGB_RE.is_match(s) && parse_rgb(s).is_some();
    }
    false
}
