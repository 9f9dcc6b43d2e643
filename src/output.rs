use colored::*;
use resistor_bands::codec::{BandSet, ColorBand, ColorDetails, ResistorValue};

/// Terminal swatch RGB for a band color
fn swatch_rgb(color: ColorBand) -> (u8, u8, u8) {
    match color {
        ColorBand::Black => (0, 0, 0),
        ColorBand::Brown => (139, 69, 19),
        ColorBand::Red => (220, 20, 20),
        ColorBand::Orange => (255, 140, 0),
        ColorBand::Yellow => (255, 215, 0),
        ColorBand::Green => (34, 160, 34),
        ColorBand::Blue => (30, 80, 220),
        ColorBand::Violet => (138, 43, 226),
        ColorBand::Gray => (128, 128, 128),
        ColorBand::White => (255, 255, 255),
        ColorBand::Gold => (212, 175, 55),
        ColorBand::Silver => (192, 192, 192),
    }
}

/// Color name padded to `width`, drawn on its own color
fn style_color(color: ColorBand, width: usize) -> ColoredString {
    let (r, g, b) = swatch_rgb(color);
    // Dark text on light swatches
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    let label = format!(" {:<width$} ", color.name(), width = width);
    if luma > 140.0 {
        label.black().on_truecolor(r, g, b)
    } else {
        label.white().on_truecolor(r, g, b)
    }
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Format a resistance with an SI prefix (e.g. 4700 -> "4.7 kΩ")
pub(crate) fn format_ohms(ohms: f64) -> String {
    let (scaled, prefix) = if ohms >= 1e9 {
        (ohms / 1e9, "G")
    } else if ohms >= 1e6 {
        (ohms / 1e6, "M")
    } else if ohms >= 1e3 {
        (ohms / 1e3, "k")
    } else {
        (ohms, "")
    };
    // Round away float noise from the division before trimming zeros
    let text = format!("{:.3}", scaled);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}Ω", text, prefix)
}

fn format_percent(percent: f64) -> String {
    format!("±{}%", percent)
}

fn format_multiplier(color: ColorBand) -> String {
    format!("x{}", color.multiplier())
}

pub(crate) fn print_color_table(colors: &[ColorBand]) {
    println!(
        "{:<8}  {:>5}  {:>12}  {:>9}",
        "COLOR", "DIGIT", "MULTIPLIER", "TOLERANCE"
    );
    println!("{}", "-".repeat(42));
    for &color in colors {
        let digit = color
            .digit()
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        let tolerance = color.tolerance().map_or_else(|| "-".to_string(), format_percent);
        println!(
            "{}  {:>5}  {:>12}  {:>9}",
            style_color(color, 6),
            digit,
            format_multiplier(color),
            tolerance
        );
    }
}

pub(crate) fn print_color_details(name: &str, details: &ColorDetails, quiet: bool) {
    let digit = details
        .band_value
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    let tolerance = details
        .tolerance
        .map_or_else(|| "-".to_string(), format_percent);

    if quiet {
        println!("{} {} {}", digit, details.multiplier, tolerance);
        return;
    }

    match name.parse::<ColorBand>() {
        Ok(color) => println!("Color: {}", style_color(color, name.len())),
        Err(_) => println!("Color: {}", name),
    }
    println!("  Digit:      {}", digit);
    println!("  Multiplier: x{}", details.multiplier);
    println!("  Tolerance:  {}", tolerance);
}

pub(crate) fn print_resistor_value(result: &ResistorValue, quiet: bool) {
    if quiet {
        println!("{} {}", result.resistor_value, result.tolerance);
        return;
    }

    println!(
        "Resistance: {} ({} Ω)",
        format_ohms(result.resistor_value).bold(),
        result.resistor_value
    );
    println!("Tolerance:  {}", format_percent(result.tolerance));
}

pub(crate) fn print_band_set(bands: &BandSet, quiet: bool) {
    let colors = bands.colors();

    if quiet {
        let names: Vec<&str> = colors.iter().map(|c| c.name()).collect();
        println!("{}", names.join(" "));
        return;
    }

    println!("Bands ({}):", colors.len());
    let labels: &[&str] = if bands.third_band.is_some() {
        &["1st digit", "2nd digit", "3rd digit", "multiplier", "tolerance"]
    } else {
        &["1st digit", "2nd digit", "multiplier", "tolerance"]
    };
    for (label, &color) in labels.iter().zip(&colors) {
        println!("  {:>10}: {}", label, style_color(color, 6));
    }
}
