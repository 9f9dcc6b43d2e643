mod mode;
mod output;

use clap::{Parser, Subcommand};

use output::print_error;

#[derive(Parser)]
#[command(
    name = "resistor-bands",
    version,
    about = "Resistor color band encoder and decoder",
    after_help = "Examples:
  resistor-bands colors                                List all band colors
  resistor-bands color violet                          Digit, multiplier and tolerance of a color
  resistor-bands value brown black -m red -t gold      Decode a 4-band resistor (1 kOhm 5%)
  resistor-bands value brown black black -m brown -t gold
                                                       Decode a 5-band resistor
  resistor-bands bands 4.7 -t 1                        Encode 4.7 Ohm 1% as 4 bands
  resistor-bands bands 470 -n 5 --json                 Encode as 5 bands, JSON output

Exit status:
  0 success, 1 invalid input, 2 usage error, 3 unknown color"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List band colors
    Colors {
        /// Only colors usable as digit bands
        #[arg(long, conflicts_with = "tolerance")]
        digits: bool,

        /// Only colors usable as tolerance bands
        #[arg(long)]
        tolerance: bool,
    },

    /// Show digit, multiplier and tolerance for a color
    Color {
        /// Color name (lowercase)
        name: String,
    },

    /// Resistance and tolerance from color bands
    Value {
        /// First digit band
        first: String,

        /// Second digit band
        second: String,

        /// Third digit band (5-band resistors only)
        third: Option<String>,

        /// Multiplier band
        #[arg(short, long, value_name = "COLOR")]
        multiplier: String,

        /// Tolerance band
        #[arg(short, long, value_name = "COLOR")]
        tolerance: String,
    },

    /// Color bands from a resistance
    Bands {
        /// Resistance in ohms
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Tolerance in percent
        #[arg(short, long, default_value = "5", value_name = "PERCENT")]
        tolerance: f64,

        /// Number of bands (4 or 5)
        #[arg(
            short = 'n',
            long,
            default_value = "4",
            value_name = "COUNT",
            allow_negative_numbers = true
        )]
        bands: i64,
    },
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    let format = mode::Format {
        json: args.json,
        quiet: args.quiet,
    };

    let result = match args.command {
        Command::Colors { digits, tolerance } => {
            let filter = if digits {
                mode::ColorFilter::Digits
            } else if tolerance {
                mode::ColorFilter::Tolerance
            } else {
                mode::ColorFilter::All
            };
            mode::run_colors(filter, format)
        }
        Command::Color { name } => mode::run_color(&name, format),
        Command::Value {
            first,
            second,
            third,
            multiplier,
            tolerance,
        } => {
            let request = resistor_bands::codec::ValueFromBandsRequest {
                first_band: first,
                second_band: second,
                third_band: third,
                multiplier,
                tolerance,
            };
            mode::run_value(&request, format)
        }
        Command::Bands {
            value,
            tolerance,
            bands,
        } => {
            let request = resistor_bands::codec::BandsFromValueRequest {
                resistor_value: value,
                tolerance,
                number_of_bands: bands,
            };
            mode::run_bands(&request, format)
        }
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
