//! Value-from-bands mode

use resistor_bands::codec::{self, ValueFromBandsRequest};

use crate::output::print_resistor_value;

use super::{Format, ModeError, print_json};

/// Decode color bands into resistance and tolerance
pub fn run_value(request: &ValueFromBandsRequest, format: Format) -> Result<(), ModeError> {
    let result = codec::value_from_bands(request)?;

    if format.json {
        return print_json(&result);
    }

    print_resistor_value(&result, format.quiet);
    Ok(())
}
