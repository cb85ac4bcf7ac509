//! Color parsing and WCAG relative-luminance math.
//!
//! Accepts named colors, 6-digit hex, 3-digit shorthand hex, and
//! `rgb(r,g,b)` literals. Luminance follows the WCAG 2.x definition:
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

use lazy_static::lazy_static;
use phf::phf_map;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from color-literal parsing.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("could not parse color: {0}")]
    Parse(String),
}

/// Named colors resolved by substitution into hex form.
static NAMED_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "white" => "#FFFFFF",
    "black" => "#000000",
    "red" => "#FF0000",
    "green" => "#008000",
    "blue" => "#0000FF",
    "yellow" => "#FFFF00",
    "cyan" => "#00FFFF",
    "magenta" => "#FF00FF",
    "gray" => "#808080",
    "grey" => "#808080",
    "silver" => "#C0C0C0",
    "maroon" => "#800000",
    "olive" => "#808000",
    "lime" => "#00FF00",
    "aqua" => "#00FFFF",
    "teal" => "#008080",
    "navy" => "#000080",
    "fuchsia" => "#FF00FF",
    "purple" => "#800080",
};

lazy_static! {
    static ref HEX6: Regex = Regex::new(r"^#?([0-9a-f]{6})").unwrap();
    static ref HEX3: Regex = Regex::new(r"^#?([0-9a-f])([0-9a-f])([0-9a-f])$").unwrap();
    static ref RGB_FN: Regex =
        Regex::new(r"^rgb\s*\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap();
}

/// An 8-bit RGB triple.
///
/// `rgb()` components above 255 are rejected at parse time rather than
/// carried into out-of-gamut luminance math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Darken every channel by `amount`, clamped at 0.
    pub fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Lighten every channel by `amount`, clamped at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }
}

/// Parse a color literal into an RGB triple.
///
/// Tried in priority order: named color, 6-digit hex (leading `#`
/// optional), 3-digit shorthand hex, `rgb(r,g,b)`.
pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let mut s = input.trim().to_lowercase();

    if let Some(hex) = NAMED_COLORS.get(s.as_str()) {
        s = hex.to_lowercase();
    }

    if let Some(caps) = HEX6.captures(&s) {
        let hex = &caps[1];
        return Ok(Rgb::new(
            parse_channel(&hex[0..2], 16, input)?,
            parse_channel(&hex[2..4], 16, input)?,
            parse_channel(&hex[4..6], 16, input)?,
        ));
    }

    if let Some(caps) = HEX3.captures(&s) {
        let doubled = |i: usize| format!("{}{}", &caps[i], &caps[i]);
        return Ok(Rgb::new(
            parse_channel(&doubled(1), 16, input)?,
            parse_channel(&doubled(2), 16, input)?,
            parse_channel(&doubled(3), 16, input)?,
        ));
    }

    if let Some(caps) = RGB_FN.captures(&s) {
        return Ok(Rgb::new(
            parse_channel(&caps[1], 10, input)?,
            parse_channel(&caps[2], 10, input)?,
            parse_channel(&caps[3], 10, input)?,
        ));
    }

    Err(ColorError::Parse(input.trim().to_string()))
}

fn parse_channel(digits: &str, radix: u32, input: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(digits, radix).map_err(|_| ColorError::Parse(input.trim().to_string()))
}

/// Relative luminance of an sRGB color, in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let linear = [rgb.r, rgb.g, rgb.b].map(|c| {
        let channel = c as f64 / 255.0;
        if channel <= 0.03928 {
            channel / 12.92
        } else {
            ((channel + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126 * linear[0] + 0.7152 * linear[1] + 0.0722 * linear[2]
}

/// WCAG contrast ratio between two colors, always >= 1.0.
///
/// Symmetric in its arguments: the lighter luminance is placed in the
/// numerator regardless of order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}
