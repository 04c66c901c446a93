//! Input validation functions
//!
//! Form fields arrive as free text. They are parsed the way browsers parse
//! numeric text (`parseFloat`): leading whitespace is skipped and the
//! longest numeric prefix is taken, so `"70kg"` reads as `70`.

use crate::errors::BmiError;

/// Parse the leading number of a text field
///
/// Returns `None` when the text does not start with a number.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    let mut end = i;
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            end = j;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Check that a value is finite and strictly positive
pub fn validate_positive(value: f64) -> Result<f64, BmiError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BmiError::InvalidInput);
    }
    Ok(value)
}

/// Parse and validate a height or weight field
pub fn parse_field(input: &str) -> Result<f64, BmiError> {
    parse_number(input)
        .ok_or(BmiError::InvalidInput)
        .and_then(validate_positive)
}
