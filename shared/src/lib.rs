//! BMI Calculator Shared Library
//!
//! This crate contains the BMI evaluator and the form, unit and rendering
//! helpers used by the backend and WASM modules.

pub mod advice;
pub mod bmi;
pub mod errors;
pub mod form;
pub mod report;
pub mod types;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use advice::Advisory;
pub use bmi::*;
pub use errors::*;
pub use form::CalculatorForm;
pub use report::BmiReport;
pub use types::*;
pub use units::*;
