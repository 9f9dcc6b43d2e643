//! Resistor color band encoding and decoding

mod decode;
mod encode;
mod error;
mod table;

pub use decode::{ResistorValue, ValueFromBandsRequest, value_from_bands};
pub use encode::{BandSet, BandsFromValueRequest, bands_from_value};
pub use error::{BandPosition, CodecError, Result};
pub use table::{
    ColorBand, ColorDetails, ColorSpec, digit_colors, list_colors, lookup, tolerance_colors,
};

/// Details for a color by name
pub fn color_details(name: &str) -> Result<ColorDetails> {
    lookup(name)
}
