//! Color bands from a resistance value
//!
//! Values are handled through their shortest decimal representation rather
//! than by repeated floating-point scaling, so the multiplier is always an
//! exact power of ten and maps to its color by exponent.

use serde::{Deserialize, Serialize};

use super::error::{CodecError, Result};
use super::table::ColorBand;

/// Resistance to encode
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BandsFromValueRequest {
    /// Resistance in ohms
    pub resistor_value: f64,
    /// Tolerance in percent; must match a tolerance color exactly
    pub tolerance: f64,
    /// Band count; anything but 4 or 5 is rejected
    pub number_of_bands: i64,
}

/// Encoded bands. `third_band` is only present for 5-band codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BandSet {
    pub first_band: ColorBand,
    pub second_band: ColorBand,
    pub third_band: Option<ColorBand>,
    pub multiplier: ColorBand,
    pub tolerance: ColorBand,
}

impl BandSet {
    /// Bands in the order they are painted on the resistor
    pub fn colors(&self) -> Vec<ColorBand> {
        let mut colors = vec![self.first_band, self.second_band];
        colors.extend(self.third_band);
        colors.push(self.multiplier);
        colors.push(self.tolerance);
        colors
    }
}

/// Encode a resistance as a 4- or 5-band code
pub fn bands_from_value(request: &BandsFromValueRequest) -> Result<BandSet> {
    let count: u32 = match request.number_of_bands {
        4 => 4,
        5 => 5,
        other => return Err(CodecError::InvalidBandCount(other)),
    };

    let value = request.resistor_value;
    let invalid = |reason: &'static str| CodecError::InvalidValue { value, reason };

    if !value.is_finite() || value <= 0.0 {
        return Err(invalid("must be a positive number"));
    }

    let text = value.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    // Lowest power of ten the multiplier may take for this value
    let min_exponent = if fraction.is_empty() {
        match (whole.len(), count) {
            (2, 5) => return Err(invalid("two-digit values need four bands")),
            (3, 4) => return Err(invalid("three-digit values need five bands")),
            _ => 0,
        }
    } else {
        if fraction.len() > 2 {
            return Err(invalid("more than two decimal places"));
        }
        if fraction.len() == 2 && count != 5 {
            return Err(invalid("two decimal places need five bands"));
        }
        -(count as i32 - 3)
    };

    let all_digits = format!("{whole}{fraction}");
    let significant = all_digits.trim_start_matches('0');
    let trimmed = significant.trim_end_matches('0');
    let mut exponent = (significant.len() - trimmed.len()) as i32 - fraction.len() as i32;

    let digits = count - 2;
    if trimmed.len() > digits as usize {
        return Err(invalid("too many significant digits for the band count"));
    }
    let mut significand: u32 = trimmed
        .parse()
        .map_err(|_| invalid("not a decimal number"))?;

    while significand < 10u32.pow(digits - 1) && exponent > min_exponent {
        significand *= 10;
        exponent -= 1;
    }

    let multiplier =
        ColorBand::from_exponent(exponent).ok_or(CodecError::UnknownMultiplier(exponent))?;
    let tolerance = ColorBand::from_tolerance(request.tolerance)
        .ok_or(CodecError::UnknownTolerance(request.tolerance))?;

    let digit_at = |place: u32| {
        let digit = (significand / 10u32.pow(place) % 10) as u8;
        ColorBand::from_digit(digit).ok_or_else(|| invalid("digit out of range"))
    };

    let (first_band, second_band, third_band) = if count == 5 {
        (digit_at(2)?, digit_at(1)?, Some(digit_at(0)?))
    } else {
        (digit_at(1)?, digit_at(0)?, None)
    };

    Ok(BandSet {
        first_band,
        second_band,
        third_band,
        multiplier,
        tolerance,
    })
}
