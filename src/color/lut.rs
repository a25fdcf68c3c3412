// Lookup tables for channel -> linear conversions,
// trading 2KiB per color space for the powf calls.
// Entries are computed with the exact same expression as the direct path,
// so results are bit-identical with or without the feature.

use std::sync::OnceLock;

use crate::color::space::{ColorSpace, channel_to_linear};

static MAIN_TRC_TO_LINEAR: OnceLock<[f64; 256]> = OnceLock::new();
static ADOBE_TRC_TO_LINEAR: OnceLock<[f64; 256]> = OnceLock::new();

#[inline]
fn build_table(gamma: f64) -> [f64; 256] {
    let mut t = [0.0f64; 256];
    for (v, item) in t.iter_mut().enumerate() {
        *item = channel_to_linear(v as u8, gamma);
    }
    t
}

#[inline]
fn table_for(space: ColorSpace) -> &'static [f64; 256] {
    // sRGB and Display P3 share an exponent
    match space {
        ColorSpace::Srgb | ColorSpace::DisplayP3 => {
            MAIN_TRC_TO_LINEAR.get_or_init(|| build_table(space.gamma()))
        }
        ColorSpace::AdobeRgb => ADOBE_TRC_TO_LINEAR.get_or_init(|| build_table(space.gamma())),
    }
}

#[inline]
pub(crate) fn linearize_lut(space: ColorSpace, value: u8) -> f64 {
    table_for(space)[value as usize]
}
