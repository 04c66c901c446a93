//! Human-readable rendering of an evaluation

use crate::advice::Advisory;
use crate::bmi::{BmiCategory, BmiResult};
use crate::units::{format_height, format_number};
use serde::Serialize;

/// Everything the result card shows, already formatted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    /// BMI with two decimals
    pub bmi: String,
    pub category: BmiCategory,
    pub category_label: &'static str,
    pub description: &'static str,
    /// Echo of the measurement, e.g. `["Height: 1.8 m", "Weight: 70 kg"]`
    pub details: Vec<String>,
    pub advisory: Advisory,
}

impl BmiReport {
    pub fn from_result(result: &BmiResult) -> Self {
        Self {
            bmi: result.display_value(),
            category: result.category,
            category_label: result.category.label(),
            description: result.description,
            details: vec![
                format!("Height: {}", format_height(result.height_m)),
                format!("Weight: {} kg", format_number(result.weight_kg)),
            ],
            advisory: result.advisory,
        }
    }

    /// Plain-text rendering of the whole card
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("BMI: {}\n", self.bmi));
        out.push_str(&format!("Category: {}\n\n", self.category_label));
        out.push_str(self.description);
        out.push_str("\n\nDetails:\n");
        for line in &self.details {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.advisory.render_text());
        out.push('\n');
        out
    }
}

impl From<&BmiResult> for BmiReport {
    fn from(result: &BmiResult) -> Self {
        Self::from_result(result)
    }
}
