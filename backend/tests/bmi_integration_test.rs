//! Integration tests for the BMI endpoints

mod common;

use axum::http::StatusCode;
use bmi_calculator_backend::config::AppConfig;
use bmi_calculator_shared::HeightUnit;
use rstest::rstest;
use serde_json::Value;

fn json(body: &str) -> Value {
    serde_json::from_str(body).expect("response should be JSON")
}

#[tokio::test]
async fn test_post_meters() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"height":1.8,"weight":70,"unit":"m"}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["bmi"], "21.60");
    assert_eq!(body["category"], "normal");
    assert_eq!(body["category_label"], "Normal");
    assert_eq!(body["unit"], "m");
    assert_eq!(body["details"][0], "Height: 1.8 m");
    assert!(body["advisory"]["health"].as_str().unwrap().contains("physical activity"));
}

#[tokio::test]
async fn test_post_centimeters() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"height":170,"weight":70,"unit":"cm"}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["bmi"], "24.22");
}

#[rstest]
#[case("height=1.5&weight=40", "underweight")]
#[case("height=1.8&weight=70&unit=m", "normal")]
#[case("height=170&weight=80&unit=cm", "overweight")]
#[case("height=1.6&weight=90", "obese")]
#[tokio::test]
async fn test_get_categories(#[case] query: &str, #[case] expected: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.get(&format!("/api/v1/bmi?{query}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&body)["category"], expected);
}

#[rstest]
#[case(r#"{"height":0,"weight":70}"#)]
#[case(r#"{"height":-1,"weight":70}"#)]
#[case(r#"{"height":1.8,"weight":0}"#)]
#[case(r#"{"weight":70}"#)]
#[case(r#"{"height":1.8}"#)]
#[case(r#"{"height":"abc","weight":70}"#)]
#[case(r#"{"height":1.8,"weight":null}"#)]
#[tokio::test]
async fn test_post_invalid_input(#[case] payload: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/bmi", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = json(&body);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Please enter valid positive numbers for height and weight."
    );
}

#[rstest]
#[case("height=abc&weight=70")]
#[case("weight=70")]
#[case("height=1.8")]
#[case("height=0&weight=70")]
#[case("height=NaN&weight=70")]
#[tokio::test]
async fn test_get_invalid_input(#[case] query: &str) {
    let app = common::TestApp::new();

    let (status, body) = app.get(&format!("/api/v1/bmi?{query}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = json(&body);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Please enter valid positive numbers for height and weight."
    );
}

#[tokio::test]
async fn test_post_malformed_body() {
    let app = common::TestApp::new();

    let (status, body) = app.post("/api/v1/bmi", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"]["code"], "BAD_REQUEST");

    let (status, body) = app
        .post_untyped("/api/v1/bmi", r#"{"height":1.8,"weight":70}"#)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_post_unknown_unit() {
    let app = common::TestApp::new();

    let (status, body) = app
        .post("/api/v1/bmi", r#"{"height":5.9,"weight":70,"unit":"ft"}"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&body)["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_default_unit_from_config() {
    let mut config = common::test_config();
    config.calculator.default_unit = HeightUnit::Centimeters;
    let app = common::TestApp::with_config(config);

    let (status, body) = app.get("/api/v1/bmi?height=180&weight=70").await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    assert_eq!(body["unit"], "cm");
    assert_eq!(body["bmi"], "21.60");
}

#[tokio::test]
async fn test_list_categories() {
    let app = common::TestApp::with_config(AppConfig::default());

    let (status, body) = app.get("/api/v1/bmi/categories").await;

    assert_eq!(status, StatusCode::OK);
    let body = json(&body);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 4);
    assert_eq!(categories[0]["label"], "Underweight");
    assert_eq!(categories[1]["min"], 18.5);
    assert_eq!(categories[1]["max"], 25.0);
    assert!(categories[3].get("max").is_none());
}
