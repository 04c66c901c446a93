//! BMI Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the calculator runs in the
//! browser. Results cross the boundary as JSON strings.

use bmi_calculator_shared::{evaluate, BmiReport, CalculatorForm, HeightUnit};
use wasm_bindgen::prelude::*;

/// Evaluate a measurement and return the report as JSON
///
/// `unit` is `"m"` or `"cm"`. Errors carry the message meant for the user.
#[wasm_bindgen]
pub fn evaluate_bmi(height: f64, weight: f64, unit: &str) -> Result<String, JsError> {
    evaluate_json(height, weight, unit).map_err(|e| JsError::new(&e))
}

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    bmi_calculator_shared::calculate_bmi(weight_kg, HeightUnit::Centimeters.to_meters(height_cm))
}

fn evaluate_json(height: f64, weight: f64, unit: &str) -> Result<String, String> {
    let unit: HeightUnit = unit.parse()?;
    let result = evaluate(height, weight, unit).map_err(|e| e.user_message().to_string())?;
    to_json(&BmiReport::from_result(&result))
}

fn to_json(report: &BmiReport) -> Result<String, String> {
    serde_json::to_string(report).map_err(|e| e.to_string())
}

/// Calculator form bound to the page's inputs
#[wasm_bindgen]
#[derive(Default)]
pub struct BmiCalculator {
    form: CalculatorForm,
}

#[wasm_bindgen]
impl BmiCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_height(&mut self, value: &str) {
        self.form.set_height(value);
    }

    pub fn set_weight(&mut self, value: &str) {
        self.form.set_weight(value);
    }

    /// Returns false if the unit is not recognised
    pub fn set_unit(&mut self, unit: &str) -> bool {
        match unit.parse::<HeightUnit>() {
            Ok(unit) => {
                self.form.set_unit(unit);
                true
            }
            Err(_) => false,
        }
    }

    /// Evaluate the form; on false, `error()` holds the message to show
    pub fn submit(&mut self) -> bool {
        self.form.submit().is_ok()
    }

    pub fn error(&self) -> Option<String> {
        self.form.error().map(str::to_string)
    }

    /// Current result card as JSON
    pub fn report_json(&self) -> Option<String> {
        self.form.report().and_then(|r| to_json(r).ok())
    }

    /// Current result card as plain text
    pub fn report_text(&self) -> Option<String> {
        self.form.report().map(BmiReport::render_text)
    }

    /// Recalculate: clear the fields and hide the result
    pub fn reset(&mut self) {
        self.form.reset();
    }
}
