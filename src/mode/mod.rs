//! CLI mode implementations

mod bands;
mod colors;
mod value;

pub use bands::run_bands;
pub use colors::{ColorFilter, run_color, run_colors};
pub use value::run_value;

use resistor_bands::codec::CodecError;
use serde::Serialize;
use thiserror::Error;

/// Exit status for a color that does not exist
pub const EXIT_NOT_FOUND: i32 = 3;

/// Failure of a CLI mode
#[derive(Debug, Error)]
pub enum ModeError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModeError {
    /// Process exit status: `EXIT_NOT_FOUND` for unknown colors, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            ModeError::Codec(e) if e.is_not_found() => EXIT_NOT_FOUND,
            _ => 1,
        }
    }
}

/// Output options shared by every mode
#[derive(Clone, Copy)]
pub struct Format {
    pub json: bool,
    pub quiet: bool,
}

/// Print a response record as pretty JSON on stdout
fn print_json<T: Serialize>(value: &T) -> Result<(), ModeError> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{}", text);
    Ok(())
}
