//! Bands-from-value mode

use resistor_bands::codec::{self, BandsFromValueRequest, ColorBand};

use crate::output::{print_band_set, print_warning};

use super::{Format, ModeError, print_json};

/// Encode a resistance into color bands
pub fn run_bands(request: &BandsFromValueRequest, format: Format) -> Result<(), ModeError> {
    let bands = codec::bands_from_value(request)?;

    if format.json {
        return print_json(&bands);
    }

    if bands.first_band == ColorBand::Black && !format.quiet {
        print_warning("value is too small to fill every digit band; first band is black");
    }

    print_band_set(&bands, format.quiet);
    Ok(())
}
