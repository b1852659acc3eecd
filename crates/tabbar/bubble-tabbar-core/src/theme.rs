//! Light/dark palettes and the constant bar geometry.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Host appearance signal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[inline]
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// Colors the bar needs for one appearance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThemePalette {
    pub bar_background: Color,
    pub bar_shadow_color: Color,
    pub inactive_icon_color: Color,
    pub default_active_color: Color,
    pub default_active_bg_color: Color,
    pub default_inactive_bg_color: Color,
}

/// primary-500 of the app's color tokens.
fn primary_500() -> Color {
    Color::from_rgba8(0xFF, 0x7B, 0x1A, 0xFF)
}

/// primary-50 of the app's color tokens.
fn primary_50() -> Color {
    Color::from_rgba8(0xFF, 0xE2, 0xCC, 0xFF)
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            bar_background: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0xFF),
            bar_shadow_color: Color::from_rgb8_alpha(63, 63, 83, 0.2),
            inactive_icon_color: Color::from_rgba8(0x00, 0x00, 0x00, 0xFF),
            default_active_color: primary_500(),
            default_active_bg_color: primary_50(),
            default_inactive_bg_color: Color::from_rgb8_alpha(223, 215, 243, 0.0),
        }
    }

    pub fn dark() -> Self {
        Self {
            bar_background: Color::from_rgba8(0x1F, 0x1F, 0x1F, 0xFF),
            bar_shadow_color: Color::from_rgb8_alpha(0, 0, 0, 0.5),
            inactive_icon_color: Color::from_rgba8(0xAA, 0xAA, 0xAA, 0xFF),
            default_active_color: primary_500(),
            default_active_bg_color: primary_50(),
            default_inactive_bg_color: Color::from_rgb8_alpha(223, 215, 243, 0.0),
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    /// Pick the palette from a plain dark-mode flag.
    pub fn resolve(dark: bool) -> Self {
        Self::for_scheme(ColorScheme::from_dark(dark))
    }
}

/// Fixed geometry of the bar and its items. Sizes are in layout units.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    pub corner_radius: f32,
    pub shadow_offset: [f32; 2],
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub elevation: f32,
    /// Distance from the container bottom as a fraction of container height.
    pub bottom_fraction: f32,
    pub item_height: f32,
    pub item_corner_radius: f32,
    pub item_padding_x: f32,
    pub icon_box: f32,
    pub icon_size: f32,
    pub label_font_size: f32,
    pub label_font_weight: u16,
    pub label_margin_left: f32,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            corner_radius: 30.0,
            shadow_offset: [0.0, 3.0],
            shadow_opacity: 0.04,
            shadow_radius: 12.0,
            elevation: 4.0,
            bottom_fraction: 0.04,
            item_height: 44.0,
            item_corner_radius: 22.0,
            item_padding_x: 12.0,
            icon_box: 24.0,
            icon_size: 24.0,
            label_font_size: 12.0,
            label_font_weight: 600,
            label_margin_left: 8.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_only_where_expected() {
        let light = ThemePalette::resolve(false);
        let dark = ThemePalette::resolve(true);
        assert_eq!(light.bar_background.to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(dark.bar_background.to_rgba8(), [0x1F, 0x1F, 0x1F, 255]);
        assert_eq!(light.inactive_icon_color.to_rgba8(), [0, 0, 0, 255]);
        assert_eq!(dark.inactive_icon_color.to_rgba8(), [0xAA, 0xAA, 0xAA, 255]);
        assert_eq!(light.default_active_color, dark.default_active_color);
        assert_eq!(light.default_active_bg_color, dark.default_active_bg_color);
        assert_eq!(light.default_inactive_bg_color.a, 0.0);
    }

    #[test]
    fn scheme_serializes_lowercase() {
        let s: ColorScheme = serde_json::from_str("\"dark\"").unwrap();
        assert!(s.is_dark());
    }
}
