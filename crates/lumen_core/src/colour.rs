//! Colour model.
//!
//! [`Colour`] is the working-space colour: float channels that are clamped to
//! at most 1.0 after every addition and scalar multiplication. There is no
//! lower clamp; negative channels survive until [`Rgb::abs`] is applied to the
//! output-scaled value.
//!
//! [`Rgb`] is the output-space colour produced by [`Colour::to_output`]:
//! integer channels ready for serialization.

use std::fmt;
use std::ops::{Add, Mul};

use serde::Deserialize;
use thiserror::Error;

/// Default channel maximum for output scaling.
pub const CHANNEL_MAX: f64 = 255.0;

/// Errors produced while decoding colours.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColourError {
    #[error("invalid hex colour {0:?}: expected '#RRGGBB'")]
    InvalidHexFormat(String),
}

/// Working-space colour with a channel scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Scale applied by [`Colour::to_output`].
    pub max: f64,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
    pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);
    pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
    pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
    pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);

    /// Create a colour with the default channel maximum (255).
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r,
            g,
            b,
            max: CHANNEL_MAX,
        }
    }

    /// Same value replicated into all three channels.
    pub const fn grey(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Replace the channel maximum used by [`Colour::to_output`].
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Parse a `#RRGGBB` string into normalized channels.
    ///
    /// Each two-digit group is read as base 16 and divided by 255.
    pub fn from_hex(s: &str) -> Result<Self, ColourError> {
        let invalid = || ColourError::InvalidHexFormat(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| -> Result<f64, ColourError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f64 / 255.0)
                .map_err(|_| invalid())
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Multiply every channel by `k`, clamping each to at most 1.
    pub fn scale(self, k: f64) -> Colour {
        Colour::new(
            (self.r * k).min(1.0),
            (self.g * k).min(1.0),
            (self.b * k).min(1.0),
        )
    }

    /// Scale to output range: each channel times `max`, truncated toward zero.
    ///
    /// Channels are expected to be in [0, 1] already; nothing is checked here.
    pub fn to_output(self) -> Rgb {
        Rgb::new(
            (self.r * self.max) as i32,
            (self.g * self.max) as i32,
            (self.b * self.max) as i32,
        )
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Add for Colour {
    type Output = Colour;

    /// Channel-wise sum clamped to at most 1.
    fn add(self, rhs: Colour) -> Colour {
        Colour::new(
            (self.r + rhs.r).min(1.0),
            (self.g + rhs.g).min(1.0),
            (self.b + rhs.b).min(1.0),
        )
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    fn mul(self, rhs: f64) -> Colour {
        self.scale(rhs)
    }
}

/// Colour as written in scene files: `"#RRGGBB"` or `{ "r": .., "g": .., "b": .. }`.
///
/// Hex strings are only checked when converted into a [`Colour`], so a
/// malformed value surfaces as a [`ColourError`] rather than a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColourRepr {
    Hex(String),
    Channels { r: f64, g: f64, b: f64 },
}

impl TryFrom<ColourRepr> for Colour {
    type Error = ColourError;

    fn try_from(repr: ColourRepr) -> Result<Self, Self::Error> {
        match repr {
            ColourRepr::Hex(s) => Colour::from_hex(&s),
            ColourRepr::Channels { r, g, b } => Ok(Colour::new(r, g, b)),
        }
    }
}

impl From<Colour> for ColourRepr {
    fn from(c: Colour) -> Self {
        ColourRepr::Channels {
            r: c.r,
            g: c.g,
            b: c.b,
        }
    }
}

/// Output-scaled colour with integer channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Per-channel absolute value.
    pub fn abs(self) -> Rgb {
        Rgb::new(self.r.abs(), self.g.abs(), self.b.abs())
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}
