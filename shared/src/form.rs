//! Calculator form state
//!
//! Holds what the user typed, the inline error and the last result card.
//! The form is driven by three actions: editing a field, submitting, and
//! resetting for a new calculation.

use crate::bmi::evaluate;
use crate::errors::BmiError;
use crate::report::BmiReport;
use crate::units::HeightUnit;
use crate::validation::parse_field;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorForm {
    height: String,
    weight: String,
    unit: HeightUnit,
    error: Option<&'static str>,
    report: Option<BmiReport>,
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn unit(&self) -> HeightUnit {
        self.unit
    }

    /// Inline error message, if the last submission failed and nothing was edited since
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Result card of the last successful submission
    pub fn report(&self) -> Option<&BmiReport> {
        self.report.as_ref()
    }

    pub fn set_height(&mut self, value: impl Into<String>) {
        self.height = value.into();
        self.error = None;
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight = value.into();
        self.error = None;
    }

    pub fn set_unit(&mut self, unit: HeightUnit) {
        self.unit = unit;
        self.error = None;
    }

    /// Evaluate the current fields
    ///
    /// On failure the inline error is set and any previous result card is
    /// left as it was. On success the error is cleared and the new report
    /// replaces the old one.
    pub fn submit(&mut self) -> Result<&BmiReport, BmiError> {
        match self.evaluate_fields() {
            Ok(report) => {
                self.error = None;
                Ok(self.report.insert(report))
            }
            Err(e) => {
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Hide the result card and clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn evaluate_fields(&self) -> Result<BmiReport, BmiError> {
        let height = parse_field(&self.height)?;
        let weight = parse_field(&self.weight)?;
        let result = evaluate(height, weight, self.unit)?;
        Ok(BmiReport::from_result(&result))
    }
}
