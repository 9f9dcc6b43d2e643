//! Resistor color table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CodecError;

/// Color of a single band on a resistor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBand {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Gray,
    White,
    Gold,
    Silver,
}

/// Attributes a color carries in any band position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec {
    /// Significant digit (black..white only)
    pub digit: Option<u8>,
    /// Multiplier as a power of ten
    pub exponent: i32,
    /// Tolerance in percent, if the color is a valid tolerance band
    pub tolerance: Option<f64>,
}

impl ColorSpec {
    const fn new(digit: Option<u8>, exponent: i32, tolerance: Option<f64>) -> Self {
        Self {
            digit,
            exponent,
            tolerance,
        }
    }

    /// Multiplier value (10^exponent)
    pub fn multiplier(&self) -> f64 {
        scale(1, self.exponent)
    }
}

/// Scale an integer significand by a power of ten.
///
/// Negative exponents divide by the positive power so that short decimal
/// results (4.7, 0.33) come out as the nearest `f64` to the written value.
pub(crate) fn scale(significand: u32, exponent: i32) -> f64 {
    let power = 10f64.powi(exponent.abs());
    if exponent < 0 {
        significand as f64 / power
    } else {
        significand as f64 * power
    }
}

impl ColorBand {
    /// All 12 colors in table order
    pub const ALL: [ColorBand; 12] = [
        ColorBand::Black,
        ColorBand::Brown,
        ColorBand::Red,
        ColorBand::Orange,
        ColorBand::Yellow,
        ColorBand::Green,
        ColorBand::Blue,
        ColorBand::Violet,
        ColorBand::Gray,
        ColorBand::White,
        ColorBand::Gold,
        ColorBand::Silver,
    ];

    /// Table entry for this color
    pub const fn spec(self) -> ColorSpec {
        match self {
            ColorBand::Black => ColorSpec::new(Some(0), 0, None),
            ColorBand::Brown => ColorSpec::new(Some(1), 1, Some(1.0)),
            ColorBand::Red => ColorSpec::new(Some(2), 2, Some(2.0)),
            ColorBand::Orange => ColorSpec::new(Some(3), 3, None),
            ColorBand::Yellow => ColorSpec::new(Some(4), 4, None),
            ColorBand::Green => ColorSpec::new(Some(5), 5, Some(0.5)),
            ColorBand::Blue => ColorSpec::new(Some(6), 6, Some(0.25)),
            ColorBand::Violet => ColorSpec::new(Some(7), 7, Some(0.1)),
            ColorBand::Gray => ColorSpec::new(Some(8), 8, Some(0.05)),
            ColorBand::White => ColorSpec::new(Some(9), 9, None),
            ColorBand::Gold => ColorSpec::new(None, -1, Some(5.0)),
            ColorBand::Silver => ColorSpec::new(None, -2, Some(10.0)),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ColorBand::Black => "black",
            ColorBand::Brown => "brown",
            ColorBand::Red => "red",
            ColorBand::Orange => "orange",
            ColorBand::Yellow => "yellow",
            ColorBand::Green => "green",
            ColorBand::Blue => "blue",
            ColorBand::Violet => "violet",
            ColorBand::Gray => "gray",
            ColorBand::White => "white",
            ColorBand::Gold => "gold",
            ColorBand::Silver => "silver",
        }
    }

    pub fn digit(self) -> Option<u8> {
        self.spec().digit
    }

    pub fn multiplier(self) -> f64 {
        self.spec().multiplier()
    }

    pub fn tolerance(self) -> Option<f64> {
        self.spec().tolerance
    }

    /// Color carrying the given digit
    pub fn from_digit(digit: u8) -> Option<ColorBand> {
        ColorBand::ALL.into_iter().find(|c| c.digit() == Some(digit))
    }

    /// Color whose multiplier is exactly 10^exponent
    pub fn from_exponent(exponent: i32) -> Option<ColorBand> {
        ColorBand::ALL
            .into_iter()
            .find(|c| c.spec().exponent == exponent)
    }

    /// Color whose tolerance equals `percent` exactly
    pub fn from_tolerance(percent: f64) -> Option<ColorBand> {
        ColorBand::ALL
            .into_iter()
            .find(|c| c.tolerance() == Some(percent))
    }
}

impl fmt::Display for ColorBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorBand {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorBand::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CodecError::UnknownColor(s.to_string()))
    }
}

/// Colors valid as first, second or third (digit) bands
pub fn digit_colors() -> Vec<ColorBand> {
    ColorBand::ALL
        .into_iter()
        .filter(|c| c.digit().is_some())
        .collect()
}

/// Colors valid as a tolerance band
pub fn tolerance_colors() -> Vec<ColorBand> {
    ColorBand::ALL
        .into_iter()
        .filter(|c| c.tolerance().is_some())
        .collect()
}

/// Names of all colors in table order
pub fn list_colors() -> Vec<&'static str> {
    ColorBand::ALL.into_iter().map(ColorBand::name).collect()
}

/// Details for a color, as reported to callers
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDetails {
    pub band_value: Option<u8>,
    pub multiplier: f64,
    pub tolerance: Option<f64>,
}

/// Look up a color by exact name
pub fn lookup(name: &str) -> Result<ColorDetails, CodecError> {
    let color: ColorBand = name.parse()?;
    let spec = color.spec();
    Ok(ColorDetails {
        band_value: spec.digit,
        multiplier: spec.multiplier(),
        tolerance: spec.tolerance,
    })
}
