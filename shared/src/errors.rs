//! Error types for the BMI calculator

use thiserror::Error;

/// Validation failures raised while evaluating a measurement
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiError {
    /// Height or weight is missing, non-numeric, non-finite, zero, or negative
    #[error("invalid input")]
    InvalidInput,

    /// Height converted to meters is not strictly positive
    #[error("non-positive height")]
    NonPositiveHeight,
}

impl BmiError {
    /// Message shown inline next to the calculator form
    pub fn user_message(&self) -> &'static str {
        match self {
            BmiError::InvalidInput => "Please enter valid positive numbers for height and weight.",
            BmiError::NonPositiveHeight => "Height must be greater than zero.",
        }
    }
}
