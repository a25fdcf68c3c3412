// Errors shared by every stage of the contrast pipeline.

use crate::color::parse::ColorParseError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ContrastError {
    /// A luminance handed to the contrast engine was NaN or outside `0.0..=1.1`.
    #[error("luminance out of range: text {text}, background {bg}")]
    InvalidLuminance { text: f64, bg: f64 },

    /// A color string matched none of the recognized formats.
    /// Carries the string after whitespace/punctuation cleanup.
    #[error("unparsable color string: {0:?}")]
    UnparsableColor(String),

    /// A channel sequence whose length was not 3 or 4.
    #[error("unsupported channel sequence length: {0}")]
    UnsupportedInputShape(usize),

    #[error("channel value out of range: {0}")]
    ChannelOutOfRange(f64),

    /// Numeric precision must be negative, zero, or a positive integer.
    #[error("invalid precision: {0}")]
    InvalidPrecision(f64),
}

impl From<ColorParseError> for ContrastError {
    fn from(err: ColorParseError) -> Self {
        match err {
            ColorParseError::Empty => ContrastError::UnparsableColor(String::new()),
            ColorParseError::NoMatch(cleaned) => ContrastError::UnparsableColor(cleaned),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContrastError>;
