#[cfg(feature = "lut")]
mod lut;
pub mod model;
pub mod named;
pub mod parse;
pub mod space;

pub use model::{BlendOutput, Color, alpha_composite};
pub use named::named_color;
pub use parse::{ChannelFields, ColorInput, ColorParseError, normalize, parse_color};
pub use space::{
    ColorSpace, adobe_rgb_to_y, channel_to_linear, display_p3_to_y, normalized_to_linear,
    srgb_to_y,
};
