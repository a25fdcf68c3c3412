//! Bridge-PCA: perceptual lightness contrast (Lc) between a text color and its
//! background, for evaluating the readability of web content.
//!
//! ```
//! use bridge_pca::{contrast, srgb_to_y};
//!
//! let lc = contrast(srgb_to_y([0, 0, 0]), srgb_to_y([232, 230, 221])).unwrap();
//! assert!(lc > 90.0);
//! ```
//!
//! The pipeline is exposed piece by piece (`normalize`, `alpha_composite`,
//! `srgb_to_y`, `contrast`, `to_legacy_ratio`) and as one call, [`calc_contrast`].
//!
//! Not for clinical, medical or safety related evaluation.

pub mod bridge;
pub mod calc;
pub mod color;
pub mod contrast;
pub mod error;

pub use bridge::{RatioFormat, bridge_ratio, to_legacy_ratio};
pub use calc::{ContrastConfig, calc_contrast, calc_contrast_with};
pub use color::{
    BlendOutput, ChannelFields, Color, ColorInput, ColorParseError, ColorSpace, adobe_rgb_to_y,
    alpha_composite, channel_to_linear, display_p3_to_y, named_color, normalize,
    normalized_to_linear, parse_color, srgb_to_y,
};
pub use contrast::{Lc, MAX_PLACES, Polarity, Precision, contrast, contrast_lc};
pub use error::{ContrastError, Result};
