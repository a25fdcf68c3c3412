// Turn any accepted color input shape into a Color.
//
// Strings go through named lookup first, then an ordered cascade of rgb(),
// rgba() and hex matchers. The first match wins.

use crate::{
    color::{model::Color, named::named_color},
    error::{ContrastError, Result},
};

/// Characters dropped from color strings before matching, on top of whitespace.
const JUNK_CHARS: &str = "`~!@#$%^&*<>?{}:;\"'+=_";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    /// Nothing in the cascade matched. Holds the cleaned-up string.
    #[error("no color format matches {0:?}")]
    NoMatch(String),
}

/// The ways a color can be handed to [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorInput<'a> {
    /// Hex (`#fff`, `#ffffffaa`, ...), `rgb()`/`rgba()` or a color name.
    Text(&'a str),
    /// `0xRRGGBB`.
    Packed(u32),
    /// `[r, g, b]` or `[r, g, b, a]`, channels on the 0-255 scale, alpha 0-1.
    Sequence(&'a [f64]),
    Fields(ChannelFields),
}

/// Named channels. A missing alpha means opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChannelFields {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Option<f64>,
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(s: &'a str) -> Self {
        ColorInput::Text(s)
    }
}

impl<'a> From<&'a String> for ColorInput<'a> {
    fn from(s: &'a String) -> Self {
        ColorInput::Text(s.as_str())
    }
}

impl From<u32> for ColorInput<'_> {
    fn from(packed: u32) -> Self {
        ColorInput::Packed(packed)
    }
}

impl<'a> From<&'a [f64]> for ColorInput<'a> {
    fn from(seq: &'a [f64]) -> Self {
        ColorInput::Sequence(seq)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for ColorInput<'a> {
    fn from(seq: &'a [f64; N]) -> Self {
        ColorInput::Sequence(seq.as_slice())
    }
}

impl From<ChannelFields> for ColorInput<'_> {
    fn from(fields: ChannelFields) -> Self {
        ColorInput::Fields(fields)
    }
}

impl From<Color> for ColorInput<'_> {
    fn from(c: Color) -> Self {
        ColorInput::Fields(ChannelFields {
            r: c.r,
            g: c.g,
            b: c.b,
            a: Some(c.a),
        })
    }
}

impl From<[u8; 3]> for ColorInput<'_> {
    fn from(rgb: [u8; 3]) -> Self {
        Color::from_rgb(rgb).into()
    }
}

/// Bring any supported input shape down to a [`Color`].
pub fn normalize<'a>(input: impl Into<ColorInput<'a>>) -> Result<Color> {
    match input.into() {
        ColorInput::Text(s) => parse_color(s).map_err(|err| {
            log::debug!("rejecting color string {s:?}: {err}");
            ContrastError::from(err)
        }),
        ColorInput::Packed(packed) => Ok(Color::from_packed(packed)),
        ColorInput::Sequence(seq) => from_sequence(seq),
        ColorInput::Fields(ChannelFields { r, g, b, a }) => {
            Ok(Color::rgba(r, g, b, normalize_alpha(a)))
        }
    }
}

fn from_sequence(seq: &[f64]) -> Result<Color> {
    let channel = |v: f64| -> Result<u8> {
        if v.is_finite() && (0.0..=255.0).contains(&v) {
            Ok(v.round() as u8)
        } else {
            Err(ContrastError::ChannelOutOfRange(v))
        }
    };

    match *seq {
        [r, g, b] => Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => Ok(Color::rgba(
            channel(r)?,
            channel(g)?,
            channel(b)?,
            normalize_alpha(Some(a)),
        )),
        _ => Err(ContrastError::UnsupportedInputShape(seq.len())),
    }
}

// absent or NaN alpha is opaque, everything else clamps to 0..=1
fn normalize_alpha(a: Option<f64>) -> f64 {
    match a {
        Some(a) if !a.is_nan() => a.clamp(0.0, 1.0),
        _ => 1.0,
    }
}

/// Strip whitespace and junk punctuation, then lower-case.
fn clean(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && !JUNK_CHARS.contains(*c))
        .collect::<String>()
        .to_lowercase()
}

type Matcher = fn(&str) -> Option<Color>;

// tried in order, first hit wins
const MATCHERS: [Matcher; 6] = [
    match_rgb,
    match_rgba,
    match_hex3,
    match_hex4,
    match_hex6,
    match_hex8,
];

/// Parse a loosely formatted color string.
///
/// The string is stripped of whitespace and `` `~!@#$%^&*<>?{}:;"'+=_ ``, lower-cased,
/// swapped for its hex value if it names a color, and then matched against, in order:
/// * rgb(r,g,b)
/// * rgba(r,g,b,a)
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
pub fn parse_color(s: &str) -> std::result::Result<Color, ColorParseError> {
    let cleaned = clean(s);
    if cleaned.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(c) = named_color(&cleaned) {
        return Ok(c);
    }

    MATCHERS
        .iter()
        .find_map(|m| m(&cleaned))
        .ok_or(ColorParseError::NoMatch(cleaned))
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn hex_digits<const N: usize>(s: &str) -> Option<[u8; N]> {
    let bytes = s.as_bytes();
    if bytes.len() != N {
        return None;
    }

    let mut out = [0u8; N];
    for (o, &c) in out.iter_mut().zip(bytes) {
        *o = nibble(c)?;
    }
    Some(out)
}

// 1-3 decimal digits, masked to 8 bits like every other channel source
fn dec_channel(s: &str) -> Option<u8> {
    if s.is_empty() || s.len() > 3 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let v: u16 = s.parse().ok()?;
    Some((v & 0xFF) as u8)
}

// a plain decimal like 1, 0.5 or .25, no sign or exponent
fn dec_alpha(s: &str) -> Option<f64> {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let dots = s.bytes().filter(|&b| b == b'.').count();
    if digits == 0 || dots > 1 || digits + dots != s.len() {
        return None;
    }
    s.parse::<f64>().ok().map(|a| a.clamp(0.0, 1.0))
}

fn func_args<'s>(s: &'s str, name: &str) -> Option<Vec<&'s str>> {
    let args = s.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')?;
    Some(args.split(',').collect())
}

fn match_rgb(s: &str) -> Option<Color> {
    match func_args(s, "rgb")?.as_slice() {
        [r, g, b] => Some(Color::rgb(dec_channel(r)?, dec_channel(g)?, dec_channel(b)?)),
        _ => None,
    }
}

fn match_rgba(s: &str) -> Option<Color> {
    match func_args(s, "rgba")?.as_slice() {
        [r, g, b, a] => Some(Color::rgba(
            dec_channel(r)?,
            dec_channel(g)?,
            dec_channel(b)?,
            dec_alpha(a)?,
        )),
        _ => None,
    }
}

fn match_hex3(s: &str) -> Option<Color> {
    let [r, g, b] = hex_digits::<3>(s)?;
    Some(Color::rgb(r * 17, g * 17, b * 17))
}

fn match_hex4(s: &str) -> Option<Color> {
    let [r, g, b, a] = hex_digits::<4>(s)?;
    Some(Color::rgba(r * 17, g * 17, b * 17, f64::from(a * 17) / 255.0))
}

fn match_hex6(s: &str) -> Option<Color> {
    let [r1, r0, g1, g0, b1, b0] = hex_digits::<6>(s)?;
    Some(Color::rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
}

fn match_hex8(s: &str) -> Option<Color> {
    let [r1, r0, g1, g0, b1, b0, a1, a0] = hex_digits::<8>(s)?;
    Some(Color::rgba(
        r1 << 4 | r0,
        g1 << 4 | g0,
        b1 << 4 | b0,
        f64::from(a1 << 4 | a0) / 255.0,
    ))
}

impl core::str::FromStr for Color {
    type Err = ColorParseError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        parse_color(value)
    }
}
