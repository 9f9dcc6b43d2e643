//! Integration tests for resistor-bands CLI

mod common;

use common::{run, run_json, stderr, stdout};
use resistor_bands::codec::{self, BandsFromValueRequest, ColorBand, ValueFromBandsRequest};
use serde_json::json;

// =============================================================================
// Basic functionality tests
// =============================================================================

#[test]
fn test_help_flag() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Resistor color band encoder and decoder"));
    assert!(out.contains("colors"));
    assert!(out.contains("value"));
    assert!(out.contains("bands"));
    assert!(out.contains("--json"));
    assert!(out.contains("3 unknown color"));
}

#[test]
fn test_version_flag() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("resistor-bands"));
}

#[test]
fn test_missing_subcommand() {
    let output = run(&[]);
    assert!(!output.status.success());
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn test_colors_table() {
    let output = run(&["colors"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("MULTIPLIER"));
    for name in codec::list_colors() {
        assert!(out.contains(name), "missing {}", name);
    }
}

#[test]
fn test_colors_json_matches_table_order() {
    let value = run_json(&["colors"]);
    assert_eq!(value, json!(codec::list_colors()));
}

#[test]
fn test_colors_digits_only() {
    let output = run(&["-q", "colors", "--digits"]);
    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "black");
    assert_eq!(lines[9], "white");
}

#[test]
fn test_colors_tolerance_only() {
    let value = run_json(&["colors", "--tolerance"]);
    assert_eq!(
        value,
        json!(["brown", "red", "green", "blue", "violet", "gray", "gold", "silver"])
    );
}

#[test]
fn test_colors_filters_conflict() {
    let output = run(&["colors", "--digits", "--tolerance"]);
    assert!(!output.status.success());
}

#[test]
fn test_color_details() {
    let output = run(&["color", "green"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Digit:      5"));
    assert!(out.contains("±0.5%"));
}

#[test]
fn test_color_details_json() {
    let value = run_json(&["color", "silver"]);
    assert_eq!(
        value,
        json!({"bandValue": null, "multiplier": 0.01, "tolerance": 10.0})
    );
}

#[test]
fn test_color_unknown() {
    let output = run(&["color", "purple"]);
    assert_eq!(output.status.code(), Some(3), "unknown color is not found");
    assert!(stderr(&output).contains("unknown color: purple"));
}

#[test]
fn test_unknown_band_color_is_invalid_input() {
    // Unknown names in band positions are bad input, not a missing color
    let output = run(&["value", "brown", "black", "-m", "purple", "-t", "gold"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid multiplier band: purple"));
}

// =============================================================================
// Value from bands
// =============================================================================

#[test]
fn test_value_four_band() {
    let output = run(&["value", "brown", "black", "-m", "red", "-t", "gold"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("1 kΩ"));
    assert!(out.contains("±5%"));
}

#[test]
fn test_value_five_band_json() {
    let value = run_json(&["value", "brown", "black", "black", "-m", "brown", "-t", "gold"]);
    assert_eq!(value, json!({"resistorValue": 1000.0, "tolerance": 5.0}));
}

#[test]
fn test_value_quiet() {
    let output = run(&["-q", "value", "yellow", "violet", "-m", "gold", "-t", "brown"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "4.7 1");
}

#[test]
fn test_value_invalid_tolerance() {
    let output = run(&["value", "brown", "black", "-m", "red", "-t", "orange"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid tolerance band: orange"));
}

#[test]
fn test_value_invalid_digit_band() {
    let output = run(&["value", "gold", "black", "-m", "red", "-t", "gold"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid first band: gold"));
}

// =============================================================================
// Bands from value
// =============================================================================

#[test]
fn test_bands_default_four_band() {
    let output = run(&["-q", "bands", "1000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "brown black red gold");
}

#[test]
fn test_bands_five_band_json() {
    let value = run_json(&["bands", "4.75", "-t", "1", "-n", "5"]);
    assert_eq!(
        value,
        json!({
            "firstBand": "yellow",
            "secondBand": "violet",
            "thirdBand": "green",
            "multiplier": "silver",
            "tolerance": "brown"
        })
    );
}

#[test]
fn test_bands_verbose_labels() {
    let output = run(&["bands", "4700", "-t", "2"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Bands (4):"));
    assert!(out.contains("multiplier"));
    assert!(out.contains("yellow"));
    assert!(out.contains("violet"));
}

#[test]
fn test_bands_leading_black_warning() {
    let output = run(&["bands", "5"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("warning:"));
}

#[test]
fn test_bands_invalid_count() {
    let output = run(&["bands", "1000", "-n", "6"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("invalid number of bands: 6"));
}

#[test]
fn test_bands_count_outside_u8_range() {
    for count in ["300", "-1"] {
        let output = run(&["bands", "1000", "-n", count]);
        assert_eq!(output.status.code(), Some(1), "count {}", count);
        assert!(stderr(&output).contains(&format!("invalid number of bands: {}", count)));
    }
}

#[test]
fn test_bands_negative_value() {
    let output = run(&["bands", "-10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must be a positive number"));
}

#[test]
fn test_bands_unknown_tolerance() {
    let output = run(&["bands", "1000", "-t", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("no tolerance color for 3%"));
}

// =============================================================================
// Library round trips
// =============================================================================

#[test]
fn test_library_round_trip_common_values() {
    // E12 decade values, 4-band, 1k range
    for (first, second) in [
        (1, 0),
        (1, 2),
        (1, 5),
        (1, 8),
        (2, 2),
        (2, 7),
        (3, 3),
        (3, 9),
        (4, 7),
        (5, 6),
        (6, 8),
        (8, 2),
    ] {
        let first = ColorBand::from_digit(first).unwrap();
        let second = ColorBand::from_digit(second).unwrap();
        let decoded = codec::value_from_bands(&ValueFromBandsRequest {
            first_band: first.to_string(),
            second_band: second.to_string(),
            third_band: None,
            multiplier: "red".to_string(),
            tolerance: "gold".to_string(),
        })
        .unwrap();

        let encoded = codec::bands_from_value(&BandsFromValueRequest {
            resistor_value: decoded.resistor_value,
            tolerance: decoded.tolerance,
            number_of_bands: 4,
        })
        .unwrap();

        assert_eq!(encoded.first_band, first);
        assert_eq!(encoded.second_band, second);
        assert_eq!(encoded.multiplier, ColorBand::Red);
        assert_eq!(encoded.tolerance, ColorBand::Gold);
    }
}

#[test]
fn test_cli_round_trip() {
    let bands = run_json(&["bands", "33000", "-t", "0.25", "-n", "5"]);
    let first = bands["firstBand"].as_str().unwrap();
    let second = bands["secondBand"].as_str().unwrap();
    let third = bands["thirdBand"].as_str().unwrap();
    let multiplier = bands["multiplier"].as_str().unwrap();
    let tolerance = bands["tolerance"].as_str().unwrap();

    let value = run_json(&[
        "value", first, second, third, "-m", multiplier, "-t", tolerance,
    ]);
    assert_eq!(value, json!({"resistorValue": 33000.0, "tolerance": 0.25}));
}
