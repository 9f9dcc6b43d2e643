//! Color listing and color details modes

use resistor_bands::codec::{self, ColorBand};

use crate::output::{print_color_details, print_color_table};

use super::{Format, ModeError, print_json};

/// Which colors to list
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ColorFilter {
    All,
    Digits,
    Tolerance,
}

/// List band colors
pub fn run_colors(filter: ColorFilter, format: Format) -> Result<(), ModeError> {
    let colors: Vec<ColorBand> = match filter {
        ColorFilter::All => ColorBand::ALL.to_vec(),
        ColorFilter::Digits => codec::digit_colors(),
        ColorFilter::Tolerance => codec::tolerance_colors(),
    };

    if format.json {
        return print_json(&colors);
    }

    if format.quiet {
        for color in &colors {
            println!("{}", color);
        }
    } else {
        print_color_table(&colors);
    }
    Ok(())
}

/// Show details for one color
pub fn run_color(name: &str, format: Format) -> Result<(), ModeError> {
    let details = codec::color_details(name)?;

    if format.json {
        return print_json(&details);
    }

    print_color_details(name, &details, format.quiet);
    Ok(())
}
