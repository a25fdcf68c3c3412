// Channel linearization and relative luminance for the supported display spaces.
//
// These use a plain power curve instead of the piecewise sRGB transfer function;
// the exponent emulates how a monitor actually renders the encoded values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monitor exponent shared by sRGB and Display P3.
pub const MAIN_TRC: f64 = 2.4;

/// Monitor exponent for Adobe RGB (1998).
pub const ADOBE_TRC: f64 = 2.35;

// luminance coefficients, all derived for a D65 white point (x 0.312720, y 0.329030)
// sRGB primaries: R(0.640, 0.330) G(0.300, 0.600) B(0.150, 0.060)
const SRGB_COEFFS: [f64; 3] = [0.2126478133913640, 0.7151791475336150, 0.0721730390750208];
// Display P3 primaries: R(0.680, 0.320) G(0.265, 0.690) B(0.150, 0.060)
const DISPLAY_P3_COEFFS: [f64; 3] = [0.2289829594805780, 0.6917492625852380, 0.0792677779341829];
// Adobe RGB primaries: R(0.640, 0.330) G(0.210, 0.710) B(0.150, 0.060)
const ADOBE_RGB_COEFFS: [f64; 3] = [0.2973550227113810, 0.6273727497145280, 0.0752722275740913];

/// Color spaces with known luminance coefficients.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ColorSpace {
    #[default]
    Srgb,
    DisplayP3,
    AdobeRgb,
}

impl ColorSpace {
    #[must_use]
    #[inline]
    pub const fn gamma(self) -> f64 {
        match self {
            ColorSpace::Srgb | ColorSpace::DisplayP3 => MAIN_TRC,
            ColorSpace::AdobeRgb => ADOBE_TRC,
        }
    }

    /// Red, green and blue weights, summing to (very nearly) 1.0.
    #[must_use]
    #[inline]
    pub const fn coefficients(self) -> [f64; 3] {
        match self {
            ColorSpace::Srgb => SRGB_COEFFS,
            ColorSpace::DisplayP3 => DISPLAY_P3_COEFFS,
            ColorSpace::AdobeRgb => ADOBE_RGB_COEFFS,
        }
    }

    /// Linearize one encoded 8 bit channel in this space.
    #[must_use]
    #[inline]
    pub fn linearize(self, value: u8) -> f64 {
        decode(self, value)
    }

    /// Relative luminance Y of an encoded RGB triple. Any alpha is the caller's
    /// business; out-of-gamut inputs are not checked.
    #[must_use]
    pub fn luminance(self, rgb: [u8; 3]) -> f64 {
        let [kr, kg, kb] = self.coefficients();

        kr * self.linearize(rgb[0]) + kg * self.linearize(rgb[1]) + kb * self.linearize(rgb[2])
    }
}

/// Decode an 8 bit channel using the cached table for its space.
#[cfg(feature = "lut")]
#[inline]
fn decode(space: ColorSpace, value: u8) -> f64 {
    crate::color::lut::linearize_lut(space, value)
}

#[cfg(not(feature = "lut"))]
#[inline]
fn decode(space: ColorSpace, value: u8) -> f64 {
    channel_to_linear(value, space.gamma())
}

/// Decode an 8 bit encoded channel to linear light: `(value / 255) ^ gamma`.
#[must_use]
#[inline]
pub fn channel_to_linear(value: u8, gamma: f64) -> f64 {
    normalized_to_linear(f64::from(value) / 255.0, gamma)
}

/// Same as [`channel_to_linear`] for a channel already scaled to `0.0..=1.0`.
#[must_use]
#[inline]
pub fn normalized_to_linear(value: f64, gamma: f64) -> f64 {
    value.powf(gamma)
}

#[must_use]
pub fn srgb_to_y(rgb: [u8; 3]) -> f64 {
    ColorSpace::Srgb.luminance(rgb)
}

#[must_use]
pub fn display_p3_to_y(rgb: [u8; 3]) -> f64 {
    ColorSpace::DisplayP3.luminance(rgb)
}

#[must_use]
pub fn adobe_rgb_to_y(rgb: [u8; 3]) -> f64 {
    ColorSpace::AdobeRgb.luminance(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn black_is_zero_everywhere() {
        for space in [ColorSpace::Srgb, ColorSpace::DisplayP3, ColorSpace::AdobeRgb] {
            assert_eq!(space.luminance([0, 0, 0]), 0.0, "{space:?}");
        }
    }

    #[test]
    fn white_is_one_everywhere() {
        assert!(approx_eq(srgb_to_y([255, 255, 255]), 1.0));
        assert!(approx_eq(display_p3_to_y([255, 255, 255]), 1.0));
        assert!(approx_eq(adobe_rgb_to_y([255, 255, 255]), 1.0));
    }

    #[test]
    fn primaries_pick_out_their_coefficient() {
        assert_eq!(srgb_to_y([255, 0, 0]), 0.2126478133913640);
        assert_eq!(srgb_to_y([0, 255, 0]), 0.7151791475336150);
        assert_eq!(srgb_to_y([0, 0, 255]), 0.0721730390750208);
        assert_eq!(display_p3_to_y([255, 0, 0]), 0.2289829594805780);
        assert_eq!(adobe_rgb_to_y([0, 255, 0]), 0.6273727497145280);
    }

    #[test]
    fn mid_gray_uses_space_exponent() {
        // (128/255)^2.4 vs (128/255)^2.35
        assert!((srgb_to_y([128, 128, 128]) - 0.19125266438013358).abs() < 1e-12);
        assert!((adobe_rgb_to_y([128, 128, 128]) - 0.19795843176456798).abs() < 1e-12);
    }

    #[test]
    fn linearize_matches_power_curve() {
        assert_eq!(channel_to_linear(0, MAIN_TRC), 0.0);
        assert_eq!(channel_to_linear(255, MAIN_TRC), 1.0);
        assert_eq!(channel_to_linear(51, MAIN_TRC), (0.2f64).powf(2.4));
        assert_eq!(normalized_to_linear(0.5, ADOBE_TRC), 0.5f64.powf(2.35));
    }
}
