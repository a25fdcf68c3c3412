// The color value type and gamma-space alpha compositing.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::space::ColorSpace;

/// Gamma-encoded 8 bit channels with a straight (non-premultiplied) float alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// `0.0..=1.0`, 1.0 is opaque.
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 1.0,
        }
    }
}

/// How [`alpha_composite`] hands back its channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlendOutput {
    /// Rounded to the nearest integer and clamped to `0..=255`.
    #[default]
    Integer,
    /// Unrounded floats on the `0.0..=255.0` scale.
    Float,
}

/// Flatten `fg` over `bg` with plain alpha compositing in encoded space.
///
/// `out = bg * (1 - a) + fg * a` per channel, with `a` clamped to `0.0..=1.0`.
/// Blending encoded values instead of linear light is a deliberate simplification;
/// it is what browsers do for ordinary CSS opacity. A foreground whose alpha is NaN
/// carries no usable alpha and comes back untouched. The background's alpha is
/// ignored.
#[must_use]
pub fn alpha_composite(fg: Color, bg: Color, output: BlendOutput) -> [f64; 3] {
    let fg_rgb = fg.into_rgb().map(f64::from);
    if fg.a.is_nan() {
        return fg_rgb;
    }

    let alpha = fg.a.clamp(0.0, 1.0);
    let comp = 1.0 - alpha;
    let bg_rgb = bg.into_rgb().map(f64::from);

    let mut out = [0.0; 3];
    for (i, chan) in out.iter_mut().enumerate() {
        *chan = bg_rgb[i] * comp + fg_rgb[i] * alpha;
        if output == BlendOutput::Integer {
            *chan = chan.round().clamp(0.0, 255.0);
        }
    }
    out
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a 24 bit `0xRRGGBB` integer. Bits above 23 are ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self::rgb(
            ((packed & 0xFF0000) >> 16) as u8,
            ((packed & 0x00FF00) >> 8) as u8,
            (packed & 0x0000FF) as u8,
        )
    }

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    #[must_use]
    #[inline]
    pub fn into_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    #[inline]
    pub fn into_packed(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    #[must_use]
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// True for alpha at or above 1.0. NaN alpha counts as opaque.
    #[must_use]
    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0 || self.a.is_nan()
    }

    /// Composite this color over `bg` and return the opaque, integer-rounded result.
    #[must_use]
    pub fn over(self, bg: Color) -> Color {
        if self.is_opaque() {
            return self.with_alpha(1.0);
        }

        // integer mode already rounds and clamps to 0..=255
        let [r, g, b] = alpha_composite(self, bg, BlendOutput::Integer);
        Color::rgb(r as u8, g as u8, b as u8)
    }

    /// Relative luminance Y in the given space. Alpha is ignored.
    #[must_use]
    #[inline]
    pub fn luminance(self, space: ColorSpace) -> f64 {
        space.luminance(self.into_rgb())
    }

    #[must_use]
    #[inline]
    pub fn into_hex6(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color::from_rgb(rgb)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // opaque colors print as #rrggbb, anything else gets the alpha byte
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_foreground_passes_through() {
        let fg = Color::rgba(255, 0, 0, 1.0);
        let bg = Color::rgb(0, 0, 0);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [255.0, 0.0, 0.0]);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Float), [255.0, 0.0, 0.0]);
    }

    #[test]
    fn transparent_foreground_vanishes() {
        let fg = Color::rgba(255, 0, 0, 0.0);
        let bg = Color::rgb(10, 20, 30);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn half_alpha_rounds_in_integer_mode() {
        let fg = Color::rgba(0, 0, 0, 0.5);
        let bg = Color::rgb(255, 255, 255);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Float), [127.5, 127.5, 127.5]);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [128.0, 128.0, 128.0]);
    }

    #[test]
    fn alpha_is_clamped() {
        let bg = Color::rgb(10, 20, 30);
        let fg = Color::rgba(200, 100, 50, 7.0);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [200.0, 100.0, 50.0]);
        let fg = Color::rgba(200, 100, 50, -3.0);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn nan_alpha_skips_blending() {
        let fg = Color::rgba(1, 2, 3, f64::NAN);
        let bg = Color::rgb(200, 200, 200);
        assert_eq!(alpha_composite(fg, bg, BlendOutput::Integer), [1.0, 2.0, 3.0]);
        assert_eq!(fg.over(bg).into_rgb(), [1, 2, 3]);
    }

    #[test]
    fn over_returns_opaque_color() {
        let out = Color::rgba(0, 0, 0, 0.5).over(Color::rgb(255, 255, 255));
        assert_eq!(out, Color::rgb(128, 128, 128));
    }

    #[test]
    fn packed_round_trip() {
        let c = Color::from_packed(0x12_34_56);
        assert_eq!(c.into_rgb(), [0x12, 0x34, 0x56]);
        assert_eq!(c.into_packed(), 0x123456);
        // high byte is dropped
        assert_eq!(Color::from_packed(0xFF_00_00_01).into_rgb(), [0, 0, 1]);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Color::rgb(0xab, 0xcd, 0xef).to_string(), "#abcdef");
        assert_eq!(Color::rgba(0, 0, 0, 0.0).to_string(), "#00000000");
        assert_eq!(Color::rgb(1, 2, 3).into_hex6(), "010203");
    }
}
