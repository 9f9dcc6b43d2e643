//! Error types for band encoding and decoding.

use thiserror::Error;

/// Band position within a resistor code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandPosition {
    First,
    Second,
    Third,
    Multiplier,
}

impl std::fmt::Display for BandPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BandPosition::First => "first",
            BandPosition::Second => "second",
            BandPosition::Third => "third",
            BandPosition::Multiplier => "multiplier",
        };
        f.write_str(name)
    }
}

/// Errors returned by the codec.
///
/// Every variant is deterministic for a given input; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Name is not one of the 12 band colors
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// Color cannot be used in this band position
    #[error("invalid {position} band: {color}")]
    InvalidBand {
        position: BandPosition,
        color: String,
    },

    /// Color has no tolerance meaning
    #[error("invalid tolerance band: {0}")]
    InvalidTolerance(String),

    /// Resistance value cannot be encoded with the requested bands
    #[error("invalid resistor value {value}: {reason}")]
    InvalidValue { value: f64, reason: &'static str },

    /// Only 4- and 5-band codes exist
    #[error("invalid number of bands: {0} (expected 4 or 5)")]
    InvalidBandCount(i64),

    /// Normalized multiplier has no color
    #[error("no multiplier color for 10^{0}")]
    UnknownMultiplier(i32),

    /// Tolerance percentage has no color
    #[error("no tolerance color for {0}%")]
    UnknownTolerance(f64),
}

impl CodecError {
    /// Whether a caller should report this as a missing resource rather than
    /// a malformed request
    pub fn is_not_found(&self) -> bool {
        matches!(self, CodecError::UnknownColor(_))
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
