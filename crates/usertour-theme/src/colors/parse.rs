//! Internal color parsing helpers. Not part of the public API.

use regex::Regex;
use std::sync::LazyLock;
use usertour_common::types::Color;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgb()/rgba() with optional float or int alpha.
pub(crate) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap()
});

pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    Color::from_hex(s)
}

/// Parse `rgb(r,g,b)` or `rgba(r,g,b,a)`.
/// A fractional alpha is read as 0.0-1.0 and scaled to 0-255.
pub(super) fn parse_rgb(s: &str) -> Option<Color> {
    let caps = RGB_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        None => 255,
        Some(m) if m.as_str().contains('.') => {
            let a_float: f64 = m.as_str().parse().ok()?;
            if !(0.0..=1.0).contains(&a_float) {
                return None;
            }
            (a_float * 255.0).round() as u8
        }
        Some(m) => {
            let a_int: u32 = m.as_str().parse().ok()?;
            match a_int {
                0 => 0,
                1 => 255,
                2..=255 => a_int as u8,
                _ => return None,
            }
        }
    };

    Some(Color::from_rgba(r, g, b, a))
}
