//! API request and response types

use crate::advice::Advisory;
use crate::bmi::{BmiCategory, BmiResult, Measurement};
use crate::report::BmiReport;
use crate::units::HeightUnit;
use serde::{Deserialize, Serialize};

/// BMI calculation request
///
/// Used both as a JSON body and as query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiRequest {
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// `"m"` or `"cm"`; the server default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl BmiRequest {
    /// Resolve the unit and build a measurement
    pub fn to_measurement(&self, default_unit: HeightUnit) -> Result<Measurement, String> {
        let unit = match self.unit.as_deref() {
            Some(s) => s.parse::<HeightUnit>()?,
            None => default_unit,
        };
        Ok(Measurement::new(self.height, self.weight, unit))
    }
}

/// BMI calculation response
#[derive(Debug, Clone, Serialize)]
pub struct BmiResponse {
    /// Unrounded BMI
    pub value: f64,
    /// Unit the height was interpreted in
    pub unit: HeightUnit,
    #[serde(flatten)]
    pub report: BmiReport,
}

impl BmiResponse {
    pub fn new(result: &BmiResult, unit: HeightUnit) -> Self {
        Self {
            value: result.value,
            unit,
            report: BmiReport::from_result(result),
        }
    }
}

/// One entry of the category listing
#[derive(Debug, Clone, Serialize)]
pub struct CategoryInfo {
    pub category: BmiCategory,
    pub label: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound, absent for the open-ended top category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub description: &'static str,
    pub advisory: Advisory,
}

impl From<BmiCategory> for CategoryInfo {
    fn from(category: BmiCategory) -> Self {
        let (min, max) = category.range();
        Self {
            category,
            label: category.label(),
            min,
            max: max.is_finite().then_some(max),
            description: category.description(),
            advisory: category.advisory(),
        }
    }
}

/// All categories, lowest first
pub fn category_table() -> Vec<CategoryInfo> {
    BmiCategory::ALL.into_iter().map(CategoryInfo::from).collect()
}
