//! Color strings as stored in the configuration.
//!
//! Accepted forms are `rgba(r,g,b[,a])`, `rgb(r,g,b)` and `#RRGGBB`.
//! Anything else parses to opaque white; parsing never fails.

use std::sync::OnceLock;

use regex::Regex;

use crate::clamp;

/// Normalised RGBA color, every channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Opaque white, the fallback for unparseable strings.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from 8-bit channels and a float alpha.
    pub fn from_rgb8(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: clamp(a, 0.0, 1.0),
        }
    }

    /// Returns the channels as a tuple (r, g, b, a).
    pub fn rgba(&self) -> (f64, f64, f64, f64) {
        (self.r, self.g, self.b, self.a)
    }

    /// Format as `rgba(r,g,b,a)`, the form written back to the configuration.
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.rgb8();
        let a = clamp(self.a, 0.0, 1.0);
        // Keep at least one decimal so the alpha reads as a float.
        if a.fract() == 0.0 {
            format!("rgba({},{},{},{:.1})", r, g, b, a)
        } else {
            format!("rgba({},{},{},{})", r, g, b, a)
        }
    }

    /// Format as `#RRGGBB`, dropping alpha.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    fn rgb8(&self) -> (u8, u8, u8) {
        let to8 = |v: f64| (clamp(v, 0.0, 1.0) * 255.0).round() as u8;
        (to8(self.r), to8(self.g), to8(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

fn rgba_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?i)rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)\s*$",
        )
        .expect("color pattern is a valid regex")
    })
}

/// Parse a configuration color string, falling back to opaque white.
pub fn parse_color(spec: &str) -> Color {
    let s = spec.trim();
    let parsed = if s.starts_with('#') {
        parse_hex(s)
    } else {
        parse_rgba(s)
    };
    parsed.unwrap_or(Color::WHITE)
}

fn parse_rgba(s: &str) -> Option<Color> {
    let caps = rgba_regex().captures(s)?;
    let channel = |i: usize| -> Option<f64> {
        let v: u32 = caps.get(i)?.as_str().parse().ok()?;
        Some(clamp(v as f64 / 255.0, 0.0, 1.0))
    };
    let a = match caps.get(4) {
        Some(m) => m.as_str().parse::<f64>().ok()?,
        None => 1.0,
    };
    Some(Color::new(
        channel(1)?,
        channel(2)?,
        channel(3)?,
        clamp(a, 0.0, 1.0),
    ))
}

fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_rgba_without_alpha_defaults_to_opaque() {
        let c = parse_color("rgba(10, 20, 30)");
        assert!(approx_eq(c.r, 10.0 / 255.0));
        assert!(approx_eq(c.a, 1.0));
    }

    #[test]
    fn test_channels_above_255_saturate() {
        let c = parse_color("rgb(300,0,0)");
        assert!(approx_eq(c.r, 1.0));
    }

    #[test]
    fn test_alpha_above_one_is_clamped() {
        let c = parse_color("rgba(0,0,0,7)");
        assert!(approx_eq(c.a, 1.0));
    }

    #[test]
    fn test_hex_with_non_ascii_does_not_panic() {
        assert_eq!(parse_color("#ééé"), Color::WHITE);
    }

    #[test]
    fn test_to_css_keeps_float_alpha() {
        assert_eq!(Color::BLACK.to_css(), "rgba(0,0,0,1.0)");
        assert_eq!(Color::new(1.0, 0.0, 0.0, 0.5).to_css(), "rgba(255,0,0,0.5)");
    }
}
