//! Height unit handling
//!
//! Heights are entered in meters or centimeters and normalised to meters
//! before any calculation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Height unit selected on the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HeightUnit {
    #[default]
    #[serde(rename = "m", alias = "meters")]
    Meters,
    #[serde(rename = "cm", alias = "centimeters")]
    Centimeters,
}

impl HeightUnit {
    /// Convert a height in this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Meters => value,
            HeightUnit::Centimeters => value / 100.0,
        }
    }

    /// Convert a height in meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            HeightUnit::Meters => meters,
            HeightUnit::Centimeters => meters * 100.0,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Meters => "m",
            HeightUnit::Centimeters => "cm",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(HeightUnit::Meters),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Ok(HeightUnit::Centimeters)
            }
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

/// Format a height for display
///
/// Heights under one meter read better in centimeters.
pub fn format_height(height_m: f64) -> String {
    if height_m < 1.0 {
        format!("{} cm", format_number(HeightUnit::Centimeters.from_meters(height_m)))
    } else {
        format!("{} m", format_number(height_m))
    }
}

/// Shortest decimal form of a value, without a trailing `.0`
///
/// Values are first rounded to 10 decimal places so that conversions such
/// as `0.85 * 100.0` print as `85` instead of `85.00000000000001`. The
/// rounding is skipped when it would move the value by more than float
/// noise, which covers very large and very small magnitudes.
pub fn format_number(value: f64) -> String {
    let cleaned = (value * 1e10).round() / 1e10;
    if (cleaned - value).abs() <= value.abs() * 1e-9 {
        format!("{}", cleaned)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_height_conversion() {
        assert!((HeightUnit::Centimeters.to_meters(170.0) - 1.7).abs() < 1e-12);
        assert_eq!(HeightUnit::Meters.to_meters(1.8), 1.8);
        assert!((HeightUnit::Centimeters.from_meters(1.8) - 180.0).abs() < 1e-9);
    }

    #[rstest]
    #[case("m", HeightUnit::Meters)]
    #[case("Meters", HeightUnit::Meters)]
    #[case("metre", HeightUnit::Meters)]
    #[case("cm", HeightUnit::Centimeters)]
    #[case(" CM ", HeightUnit::Centimeters)]
    #[case("centimetres", HeightUnit::Centimeters)]
    fn test_parse_unit(#[case] input: &str, #[case] expected: HeightUnit) {
        assert_eq!(input.parse::<HeightUnit>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_unit() {
        assert!("ft".parse::<HeightUnit>().is_err());
        assert!("".parse::<HeightUnit>().is_err());
    }

    #[test]
    fn test_default_is_meters() {
        assert_eq!(HeightUnit::default(), HeightUnit::Meters);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&HeightUnit::Centimeters).unwrap(), "\"cm\"");
        let unit: HeightUnit = serde_json::from_str("\"m\"").unwrap();
        assert_eq!(unit, HeightUnit::Meters);
    }

    #[rstest]
    #[case(1.8, "1.8 m")]
    #[case(1.0, "1 m")]
    #[case(0.85, "85 cm")]
    #[case(1.7, "1.7 m")]
    fn test_format_height(#[case] height_m: f64, #[case] expected: &str) {
        assert_eq!(format_height(height_m), expected);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(70.0), "70");
        assert_eq!(format_number(72.5), "72.5");
        assert_eq!(format_number(0.85 * 100.0), "85");
    }

    #[rstest]
    #[case(1e-11)]
    #[case(1.5e-10)]
    #[case(1e300)]
    #[case(f64::MAX)]
    fn test_format_number_extreme_magnitudes(#[case] value: f64) {
        let formatted = format_number(value);
        assert_eq!(formatted, value.to_string());
        assert!(!formatted.contains("inf"));
        assert_ne!(formatted, "0");
    }

    #[test]
    fn test_format_number_tiny_weight() {
        assert_eq!(format_number(1e-11), "0.00000000001");
    }

    #[test]
    fn test_format_height_large_value() {
        let text = format_height(1e300);
        assert!(text.starts_with('1'));
        assert!(text.ends_with(" m"));
        assert!(!text.contains("inf"));
    }
}
