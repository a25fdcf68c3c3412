// Map an Lc score back onto the legacy "N to 1" contrast ratio scale, for
// tooling that still reports WCAG 2 style ratios during the transition.
//
// Uses the Jan 16 2022 fit, which depends on the magnitude of Lc only.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::contrast::MAX_PLACES;

// Jan 16 2022 constants
const FINAL_SCALE: f64 = 0.170;
const PRE_SCALE: f64 = -0.078;
const POWER_SHIFT: f64 = 3.14159;
const LO_THRESH: f64 = 0.222;
const LO_EXP: f64 = 0.890;

/// Output options for [`to_legacy_ratio`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatioFormat {
    /// Appended after the number.
    pub suffix: String,
    /// Decimal places, clamped to [`MAX_PLACES`] when rendered.
    pub places: usize,
}

impl Default for RatioFormat {
    fn default() -> Self {
        Self {
            suffix: " to 1".to_string(),
            places: 1,
        }
    }
}

/// The ratio's left-hand number for an Lc score. Sign is ignored.
#[must_use]
pub fn bridge_ratio(lc: f64) -> f64 {
    let x = (lc.abs() * 0.01 + PRE_SCALE).max(0.0).powf(POWER_SHIFT) + FINAL_SCALE;

    // soften the toe below the threshold
    let x = if x > LO_THRESH {
        x
    } else {
        x - (LO_THRESH - x).powf(LO_EXP)
    };

    x * 10.0
}

/// `bridge_ratio` formatted as text, e.g. `"4.6 to 1"` for Lc 75.
#[must_use]
pub fn to_legacy_ratio(lc: f64, format: &RatioFormat) -> String {
    let places = format.places.min(MAX_PLACES);
    format!("{:.*}{}", places, bridge_ratio(lc), format.suffix)
}
