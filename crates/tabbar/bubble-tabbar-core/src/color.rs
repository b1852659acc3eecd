//! RGBA color values, CSS-style parsing and linear interpolation.
//!
//! Channels are non-premultiplied sRGB in `[0, 1]`. Interpolation is per channel in the same
//! space the palette constants are written in, and returns the endpoints bit-for-bit at
//! `t <= 0` and `t >= 1`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TabBarError;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Linear interpolation for f32
#[inline]
fn lerp_f(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    #[inline]
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a `[0, 1]` alpha, the way `rgba()` strings are written.
    pub fn from_rgb8_alpha(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgb8_alpha(r, g, b, f32::from(a) / 255.0)
    }

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`, `rgba(r, g, b, a)` or
    /// `transparent`.
    pub fn parse(input: &str) -> Result<Self, TabBarError> {
        let s = input.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(input, hex);
        }
        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| TabBarError::invalid_color(input, "missing closing parenthesis"))?;
            return parse_functional(input, body);
        }
        Err(TabBarError::invalid_color(input, "unrecognized color syntax"))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn from_array(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// 8-bit channels, rounded.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Same color with alpha replaced.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Per-channel linear interpolation from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Color, t: f32) -> Color {
        if t.is_nan() || t <= 0.0 {
            return self;
        }
        if t >= 1.0 {
            return other;
        }
        let a = self.to_array();
        let b = other.to_array();
        Color::from_array(std::array::from_fn(|i| lerp_f(a[i], b[i], t)))
    }
}

fn hex_digit(input: &str, c: u8) -> Result<u8, TabBarError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(TabBarError::invalid_color(input, "non-hex digit")),
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Color, TabBarError> {
    let bytes = hex.as_bytes();
    let pair = |i: usize| -> Result<u8, TabBarError> {
        Ok(hex_digit(input, bytes[i])? * 16 + hex_digit(input, bytes[i + 1])?)
    };
    match bytes.len() {
        3 => {
            let r = hex_digit(input, bytes[0])?;
            let g = hex_digit(input, bytes[1])?;
            let b = hex_digit(input, bytes[2])?;
            Ok(Color::from_rgba8(r * 17, g * 17, b * 17, 255))
        }
        6 => Ok(Color::from_rgba8(pair(0)?, pair(2)?, pair(4)?, 255)),
        8 => Ok(Color::from_rgba8(pair(0)?, pair(2)?, pair(4)?, pair(6)?)),
        n => Err(TabBarError::invalid_color(
            input,
            format!("expected 3, 6 or 8 hex digits, got {n}"),
        )),
    }
}

fn parse_functional(input: &str, body: &str) -> Result<Color, TabBarError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(TabBarError::invalid_color(
            input,
            format!("expected 3 or 4 components, got {}", parts.len()),
        ));
    }
    let number = |s: &str| -> Result<f32, TabBarError> {
        s.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| TabBarError::invalid_color(input, format!("bad component '{s}'")))
    };
    let channel =
        |s: &str| -> Result<f32, TabBarError> { Ok(number(s)?.clamp(0.0, 255.0) / 255.0) };
    let alpha = match parts.get(3) {
        Some(s) => number(s)?.clamp(0.0, 1.0),
        None => 1.0,
    };
    Ok(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

impl FromStr for Color {
    type Err = TabBarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = TabBarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({r}, {g}, {b}, {})", self.a)
    }
}
