//! Resistance value from color bands

use serde::{Deserialize, Serialize};

use super::error::{BandPosition, CodecError, Result};
use super::table::{ColorBand, scale};

/// Band colors to decode, by name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueFromBandsRequest {
    pub first_band: String,
    pub second_band: String,
    #[serde(default)]
    pub third_band: Option<String>,
    pub multiplier: String,
    pub tolerance: String,
}

/// Decoded resistance (ohms) and tolerance (percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistorValue {
    pub resistor_value: f64,
    pub tolerance: f64,
}

fn digit_band(name: &str, position: BandPosition) -> Result<u8> {
    name.parse::<ColorBand>()
        .ok()
        .and_then(ColorBand::digit)
        .ok_or_else(|| CodecError::InvalidBand {
            position,
            color: name.to_string(),
        })
}

/// Decode a 4-band (no third band) or 5-band resistor code
pub fn value_from_bands(request: &ValueFromBandsRequest) -> Result<ResistorValue> {
    let first = digit_band(&request.first_band, BandPosition::First)?;
    let second = digit_band(&request.second_band, BandPosition::Second)?;
    let third = request
        .third_band
        .as_deref()
        .map(|name| digit_band(name, BandPosition::Third))
        .transpose()?;

    let multiplier = request
        .multiplier
        .parse::<ColorBand>()
        .map_err(|_| CodecError::InvalidBand {
            position: BandPosition::Multiplier,
            color: request.multiplier.clone(),
        })?;

    let tolerance = request
        .tolerance
        .parse::<ColorBand>()
        .ok()
        .and_then(ColorBand::tolerance)
        .ok_or_else(|| CodecError::InvalidTolerance(request.tolerance.clone()))?;

    let significand = match third {
        None => first as u32 * 10 + second as u32,
        Some(third) => first as u32 * 100 + second as u32 * 10 + third as u32,
    };

    Ok(ResistorValue {
        resistor_value: scale(significand, multiplier.spec().exponent),
        tolerance,
    })
}
