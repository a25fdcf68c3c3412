// One-call contrast from raw color inputs:
// normalize -> flatten translucent text -> luminance -> Lc

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    color::{
        BlendOutput, Color, ColorInput, ColorSpace, alpha_composite, normalize,
        normalized_to_linear,
    },
    contrast::{Lc, contrast_lc},
    error::Result,
};

/// Knobs for [`calc_contrast_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ContrastConfig {
    /// Space both colors are encoded in.
    pub space: ColorSpace,
    /// Rounding applied to translucent text after it is flattened onto the background.
    pub blend: BlendOutput,
}

/// Lc of `text` drawn over `bg`, both in sRGB.
///
/// ```
/// let lc = bridge_pca::calc_contrast("#000", "white").unwrap();
/// assert!(lc > 100.0);
/// ```
pub fn calc_contrast<'t, 'b>(
    text: impl Into<ColorInput<'t>>,
    bg: impl Into<ColorInput<'b>>,
) -> Result<f64> {
    calc_contrast_with(text, bg, &ContrastConfig::default()).map(|lc| lc.value)
}

pub fn calc_contrast_with<'t, 'b>(
    text: impl Into<ColorInput<'t>>,
    bg: impl Into<ColorInput<'b>>,
    config: &ContrastConfig,
) -> Result<Lc> {
    let bg = normalize(bg)?;
    let text = normalize(text)?;
    log::trace!("normalized text {text} over bg {bg}");

    let text_y = if text.is_opaque() {
        text.luminance(config.space)
    } else {
        let flat = alpha_composite(text, bg, config.blend);
        log::trace!("flattened translucent text to {flat:?}");
        flat_luminance(flat, config)
    };
    let bg_y = bg.luminance(config.space);
    log::trace!("luminance text {text_y}, bg {bg_y}");

    contrast_lc(text_y, bg_y)
}

fn flat_luminance(rgb: [f64; 3], config: &ContrastConfig) -> f64 {
    match config.blend {
        // already rounded into 0..=255
        BlendOutput::Integer => Color::rgb(rgb[0] as u8, rgb[1] as u8, rgb[2] as u8)
            .luminance(config.space),
        BlendOutput::Float => {
            let [kr, kg, kb] = config.space.coefficients();
            let gamma = config.space.gamma();
            let lin = rgb.map(|c| normalized_to_linear(c / 255.0, gamma));
            kr * lin[0] + kg * lin[1] + kb * lin[2]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ChannelFields;
    use crate::contrast::Polarity;
    use crate::error::ContrastError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn strings_and_numbers_agree() {
        let a = calc_contrast("#000000", "#ffffff").unwrap();
        let b = calc_contrast(0x000000u32, 0xffffffu32).unwrap();
        let c = calc_contrast("black", &[255.0, 255.0, 255.0]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert!(approx_eq(a, 106.04066682868873), "got {a}");
    }

    #[test]
    fn translucent_text_is_flattened_first() {
        // 50% black over white rounds to #808080
        let lc = calc_contrast("rgba(0,0,0,0.5)", "white").unwrap();
        assert!(approx_eq(lc, 66.8960992788227), "got {lc}");
        assert_eq!(lc, calc_contrast("#808080", "white").unwrap());
    }

    #[test]
    fn fully_transparent_text_has_no_contrast() {
        let lc = calc_contrast("#0000", "#fff").unwrap();
        assert_eq!(lc, 0.0);
    }

    #[test]
    fn float_blend_skips_rounding() {
        let config = ContrastConfig {
            blend: BlendOutput::Float,
            ..ContrastConfig::default()
        };
        let text = ChannelFields {
            r: 0,
            g: 0,
            b: 0,
            a: Some(0.5),
        };
        let float = calc_contrast_with(text, "white", &config).unwrap().value;
        let int = calc_contrast(text, "white").unwrap();
        assert!(float != int);
        assert!((float - int).abs() < 1.0);
    }

    #[test]
    fn other_spaces() {
        let config = ContrastConfig {
            space: ColorSpace::AdobeRgb,
            ..ContrastConfig::default()
        };
        let lc = calc_contrast_with("#fff", "#000", &config).unwrap();
        assert_eq!(lc.polarity, Polarity::Reverse);
        assert!(lc.value < -100.0);
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            calc_contrast("bogus", "#fff"),
            Err(ContrastError::UnparsableColor("bogus".to_string()))
        );
        assert_eq!(
            calc_contrast(&[1.0, 2.0], "#fff"),
            Err(ContrastError::UnsupportedInputShape(2))
        );
    }
}
