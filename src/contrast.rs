// The Bridge-PCA lightness contrast predictor (SAPC G-4g constants).
//
// Takes the linear luminance of the text and of the background, in that order,
// and returns a signed lightness contrast `Lc`:
//
// * positive for dark text on a light background ("BoW", normal polarity),
// * negative for light text on a dark background ("WoB", reverse polarity).
//
// The range is roughly ±108. Lc 60 is "sort of like" the old 4.5:1 ratio. The
// result is polarity dependent, so swapping the two inputs does not simply flip
// the sign.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ContrastError, Result};

/// Most decimals a fixed-point rendering may ask for.
pub const MAX_PLACES: usize = 100;

/// Accepted input range for either luminance, with some headroom above 1.0.
const INPUT_RANGE: (f64, f64) = (0.0, 1.1);

// exponents for normal (dark on light) and reverse (light on dark) polarity,
// tuned for the 2.4 monitor exponent
const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;

const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const SCALE_BOW: f64 = 1.14;
const SCALE_WOB: f64 = 1.14;
const LO_BOW_OFFSET: f64 = 0.027;
const LO_WOB_OFFSET: f64 = 0.027;
const BRIDGE_WOB_FACTOR: f64 = 0.1414;
const BRIDGE_WOB_PIVOT: f64 = 0.84;
const LO_CLIP: f64 = 0.1;
const DELTA_Y_MIN: f64 = 0.0005;

/// Which way round the lightness difference goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// Dark text on a light background.
    Normal,
    /// Light text on a dark background.
    Reverse,
}

impl Polarity {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Polarity::Normal => "BoW",
            Polarity::Reverse => "WoB",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A contrast score together with the polarity branch that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lc {
    /// Signed score, already scaled by 100.
    pub value: f64,
    pub polarity: Polarity,
}

/// How to render an [`Lc`] as text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Precision {
    /// The signed float as is.
    #[default]
    Raw,
    /// Magnitude rounded to an integer followed by the polarity tag, e.g. `"106 BoW"`.
    Tagged,
    /// Signed value with a fixed number of decimals, at most [`MAX_PLACES`].
    Fixed(usize),
}

impl TryFrom<f64> for Precision {
    type Error = ContrastError;

    /// Map the numeric "places" convention: negative is raw, zero is tagged and a
    /// positive integer up to [`MAX_PLACES`] is that many decimals.
    fn try_from(places: f64) -> Result<Self> {
        if places < 0.0 {
            Ok(Precision::Raw)
        } else if places == 0.0 {
            Ok(Precision::Tagged)
        } else if places.fract() == 0.0 && places <= MAX_PLACES as f64 {
            Ok(Precision::Fixed(places as usize))
        } else {
            // NaN, infinity, fractions and too many places
            Err(ContrastError::InvalidPrecision(places))
        }
    }
}

impl Lc {
    #[must_use]
    pub fn format(&self, precision: Precision) -> String {
        match precision {
            Precision::Raw => self.value.to_string(),
            Precision::Tagged => format!("{} {}", self.value.abs().round(), self.polarity),
            Precision::Fixed(places) => format!("{:.*}", places.min(MAX_PLACES), self.value),
        }
    }
}

impl fmt::Display for Lc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Precision::Tagged))
    }
}

// soft clamp near black to emulate flare and black level
#[inline]
fn soft_clamp(y: f64) -> f64 {
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Lightness contrast of text luminance `text_y` against background `bg_y`.
///
/// Both inputs must lie in `0.0..=1.1`; NaN or anything outside is an
/// [`ContrastError::InvalidLuminance`]. Do not swap the arguments.
pub fn contrast_lc(text_y: f64, bg_y: f64) -> Result<Lc> {
    let (lo, hi) = INPUT_RANGE;
    if text_y.is_nan() || bg_y.is_nan() || text_y.min(bg_y) < lo || text_y.max(bg_y) > hi {
        log::debug!("luminance out of range: text {text_y}, bg {bg_y}");
        return Err(ContrastError::InvalidLuminance {
            text: text_y,
            bg: bg_y,
        });
    }

    let text_y = soft_clamp(text_y);
    let bg_y = soft_clamp(bg_y);
    let polarity = if bg_y > text_y {
        Polarity::Normal
    } else {
        Polarity::Reverse
    };

    // perceptually identical
    if (bg_y - text_y).abs() < DELTA_Y_MIN {
        return Ok(Lc {
            value: 0.0,
            polarity,
        });
    }

    let output = match polarity {
        Polarity::Normal => {
            let sapc = (bg_y.powf(NORM_BG) - text_y.powf(NORM_TXT)) * SCALE_BOW;

            // low clip keeps the sign from flipping near zero
            if sapc < LO_CLIP {
                0.0
            } else {
                sapc - LO_BOW_OFFSET
            }
        }
        Polarity::Reverse => {
            let sapc = (bg_y.powf(REV_BG) - text_y.powf(REV_TXT)) * SCALE_WOB;

            // aligns very light text with the WCAG 2 ratio math
            let bridge = (text_y / BRIDGE_WOB_PIVOT - 1.0).max(0.0) * BRIDGE_WOB_FACTOR;

            if sapc > -LO_CLIP {
                0.0
            } else {
                sapc + LO_WOB_OFFSET + bridge
            }
        }
    };

    Ok(Lc {
        value: output * 100.0,
        polarity,
    })
}

/// Signed Lc as a plain float, see [`contrast_lc`].
pub fn contrast(text_y: f64, bg_y: f64) -> Result<f64> {
    contrast_lc(text_y, bg_y).map(|lc| lc.value)
}
