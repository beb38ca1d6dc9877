use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_rgba(0, 0, 0, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Self::from_rgba(r * 17, g * 17, b * 17, 255))
            }
            6 => Some(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: 255,
            }),
            8 => Some(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
                a: channel(&hex[6..8])?,
            }),
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            self.r,
            self.g,
            self.b,
            alpha_fraction(self.a)
        )
    }
}

fn alpha_fraction(a: u8) -> String {
    let v = (a as f64 / 255.0 * 100.0).round() / 100.0;
    format!("{v}")
}

/// Blend `base` toward `toward` by `ratio` (0.0 keeps `base`, 1.0 yields `toward`).
///
/// Channels are linearly interpolated and rounded; alpha is taken from `base`.
pub fn mix(base: Color, toward: Color, ratio: f64) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let blend = |a: u8, b: u8| -> u8 {
        let value = (a as f64) * (1.0 - ratio) + (b as f64) * ratio;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color {
        r: blend(base.r, toward.r),
        g: blend(base.g, toward.g),
        b: blend(base.b, toward.b),
        a: base.a,
    }
}
