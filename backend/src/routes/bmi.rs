//! BMI calculation API routes

use crate::error::ApiResult;
use crate::services::bmi::BmiService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::get,
    Json, Router,
};
use bmi_calculator_shared::{category_table, BmiRequest, BmiResponse, CategoryInfo};

/// Create BMI routes
pub fn bmi_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(evaluate_query).post(evaluate_body))
        .route("/categories", get(list_categories))
}

/// POST /api/v1/bmi - Evaluate a JSON body
async fn evaluate_body(
    State(state): State<AppState>,
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Json(req) = payload?;
    let response = BmiService::evaluate(&req, state.config().calculator.default_unit)?;
    Ok(Json(response))
}

/// GET /api/v1/bmi?height=..&weight=..&unit=.. - Evaluate query parameters
async fn evaluate_query(
    State(state): State<AppState>,
    query: Result<Query<BmiRequest>, QueryRejection>,
) -> ApiResult<Json<BmiResponse>> {
    let Query(req) = query?;
    let response = BmiService::evaluate(&req, state.config().calculator.default_unit)?;
    Ok(Json(response))
}

/// GET /api/v1/bmi/categories - List categories with thresholds and guidance
async fn list_categories() -> Json<Vec<CategoryInfo>> {
    Json(category_table())
}
