//! BMI evaluation service

use crate::error::ApiError;
use bmi_calculator_shared::{BmiRequest, BmiResponse, HeightUnit};
use tracing::{debug, warn};

pub struct BmiService;

impl BmiService {
    /// Evaluate a request, falling back to `default_unit` when it names none
    pub fn evaluate(request: &BmiRequest, default_unit: HeightUnit) -> Result<BmiResponse, ApiError> {
        let measurement = request.to_measurement(default_unit).map_err(|msg| {
            warn!(unit = ?request.unit, "Rejected BMI request with unknown unit");
            ApiError::BadRequest(msg)
        })?;

        let result = measurement.evaluate().map_err(|e| {
            warn!(
                height = measurement.height,
                weight = measurement.weight,
                unit = %measurement.unit,
                error = %e,
                "Rejected BMI input"
            );
            ApiError::from(e)
        })?;

        debug!(
            bmi = result.value,
            category = %result.category,
            unit = %measurement.unit,
            "Evaluated BMI"
        );

        Ok(BmiResponse::new(&result, measurement.unit))
    }
}
