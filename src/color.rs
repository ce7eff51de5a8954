//! Colors.

use tracing::debug;

/// An RGBA color with components between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0., 0., 0.);
    pub const WHITE: Color = Color::rgb(1., 1., 1.);
    pub const RED: Color = Color::rgb(1., 0., 0.);
    pub const GREEN: Color = Color::rgb(0., 1., 0.);
    pub const BLUE: Color = Color::rgb(0., 0., 1.);
    pub const GRAY: Color = Color::rgb(136. / 255., 136. / 255., 136. / 255.);
    pub const TRANSPARENT: Color = Color {
        r: 0.,
        g: 0.,
        b: 0.,
        a: 0.,
    };

    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1. }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Color {
        let channel = |shift: u32| f64::from((argb >> shift) & 0xFF) / 255.;
        Color {
            a: channel(24),
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Packs the color into `0xAARRGGBB`.
    pub fn to_argb(&self) -> u32 {
        let channel = |value: f64| (value.max(0.).min(1.) * 255.).round() as u32;
        channel(self.a) << 24 | channel(self.r) << 16 | channel(self.g) << 8 | channel(self.b)
    }

    /// Parses `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Color::from_argb(0xFF00_0000 | value)),
            8 => Some(Color::from_argb(value)),
            _ => None,
        }
    }

    /// Looks up one of the named colors.
    pub fn from_name(name: &str) -> Option<Color> {
        match name.to_ascii_lowercase().as_str() {
            "red" => Some(Color::RED),
            "green" => Some(Color::GREEN),
            "blue" => Some(Color::BLUE),
            "white" => Some(Color::WHITE),
            "black" => Some(Color::BLACK),
            "gray" | "grey" => Some(Color::GRAY),
            "transparent" => Some(Color::TRANSPARENT),
            _ => None,
        }
    }
}

/// Turns color strings from descriptors into colors.
pub trait ColorResolver: Send + Sync {
    /// Parses a color. Never fails; unparseable input yields some fallback color.
    fn resolve(&self, color: &str) -> Color;
}

/// Hex strings starting with `#`, otherwise a small table of names, otherwise the fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColors {
    pub fallback: Color,
}

impl Default for NamedColors {
    fn default() -> Self {
        NamedColors {
            fallback: Color::BLACK,
        }
    }
}

impl ColorResolver for NamedColors {
    fn resolve(&self, color: &str) -> Color {
        let color = color.trim();
        let parsed = if color.starts_with('#') {
            Color::from_hex(color)
        } else {
            Color::from_name(color)
        };
        parsed.unwrap_or_else(|| {
            debug!(color, "unparseable color, using fallback");
            self.fallback
        })
    }
}

#[test]
fn test_hex_colors() {
    assert_eq!(Color::from_hex("#FFFFFF"), Some(Color::WHITE));
    assert_eq!(Color::from_hex("#00000000"), Some(Color::TRANSPARENT));
    assert_eq!(
        Color::from_hex("#802196F3").map(|c| c.to_argb()),
        Some(0x8021_96F3)
    );
    assert_eq!(Color::from_hex("#FFF"), None, "short hex isn't supported");
    assert_eq!(Color::from_hex("#+FFFFF"), None);
    assert_eq!(Color::from_hex("FFFFFF"), None);
}

#[test]
fn test_named_colors_fallback() {
    let colors = NamedColors::default();
    assert_eq!(colors.resolve("Red"), Color::RED);
    assert_eq!(colors.resolve("#zzzzzz"), Color::BLACK);
    assert_eq!(colors.resolve("mauve"), Color::BLACK);

    let colors = NamedColors {
        fallback: Color::WHITE,
    };
    assert_eq!(colors.resolve(""), Color::WHITE);
}
