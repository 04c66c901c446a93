//! BMI evaluation
//!
//! Turns a height, a weight and a height unit into a BMI value, a category
//! and the guidance text for that category.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: evaluation has no side effects and keeps no state
//! 2. **Closed Categories**: the four categories are an enum, matched exhaustively
//! 3. **Unrounded Classification**: thresholds apply to the raw value, rounding is display only

use crate::advice::{self, Advisory};
use crate::errors::BmiError;
use crate::units::HeightUnit;
use crate::validation::validate_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the normal range
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the overweight range
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the obese range
pub const OBESE_MIN: f64 = 30.0;

// ============================================================================
// Measurement
// ============================================================================

/// One height/weight pair as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height: f64,
    #[serde(default)]
    pub unit: HeightUnit,
    /// Weight in kilograms
    pub weight: f64,
}

impl Measurement {
    pub fn new(height: f64, weight: f64, unit: HeightUnit) -> Self {
        Self { height, unit, weight }
    }

    /// Evaluate this measurement
    pub fn evaluate(&self) -> Result<BmiResult, BmiError> {
        evaluate(self.height, self.weight, self.unit)
    }
}

// ============================================================================
// Categories
// ============================================================================

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories, lowest BMI first
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    /// Half-open BMI range `[min, max)` covered by this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, NORMAL_MIN),
            BmiCategory::Normal => (NORMAL_MIN, OVERWEIGHT_MIN),
            BmiCategory::Overweight => (OVERWEIGHT_MIN, OBESE_MIN),
            BmiCategory::Obese => (OBESE_MIN, f64::INFINITY),
        }
    }

    /// Label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn description(&self) -> &'static str {
        advice::description_for(*self)
    }

    pub fn advisory(&self) -> Advisory {
        advice::advisory_for(*self)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Outcome of a BMI evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiResult {
    /// Unrounded BMI in kg/m²
    pub value: f64,
    pub category: BmiCategory,
    pub description: &'static str,
    pub advisory: Advisory,
    /// Height the value was computed from, in meters
    pub height_m: f64,
    pub weight_kg: f64,
}

impl BmiResult {
    /// BMI rounded to two decimal places, ties away from zero
    pub fn rounded(&self) -> f64 {
        let scaled = (self.value * 100.0).round();
        if scaled.is_finite() {
            scaled / 100.0
        } else {
            self.value
        }
    }

    /// BMI formatted with exactly two decimals, e.g. `"21.60"`
    ///
    /// Formats the value from `rounded()` so that exact ties such as
    /// 20.125 show as `"20.13"`.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.rounded())
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Classify an unrounded BMI value
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < OBESE_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Evaluate a height/weight pair
///
/// Both inputs must be finite and strictly positive. Heights given in
/// centimeters are converted to meters before the calculation.
pub fn evaluate(height: f64, weight: f64, unit: HeightUnit) -> Result<BmiResult, BmiError> {
    let height = validate_positive(height)?;
    let weight_kg = validate_positive(weight)?;

    let height_m = unit.to_meters(height);
    if height_m <= 0.0 {
        return Err(BmiError::NonPositiveHeight);
    }

    let value = calculate_bmi(weight_kg, height_m);
    let category = classify_bmi(value);

    Ok(BmiResult {
        value,
        category,
        description: category.description(),
        advisory: category.advisory(),
        height_m,
        weight_kg,
    })
}
