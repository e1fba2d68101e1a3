use frisbo_client::error::AppError;
use reqwest::StatusCode;
use serde_json::json;
use std::error::Error;

#[test]
fn test_app_error_display_authentication() {
    let error = AppError::Authentication("Invalid credentials".to_string());
    assert_eq!(error.to_string(), "authentication error: Invalid credentials");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound {
        message: "Order not found".to_string(),
        body: None,
    };
    assert_eq!(error.to_string(), "not found: Order not found");
    assert!(error.is_not_found());
    assert_eq!(error.status_code(), Some(StatusCode::NOT_FOUND));
}

#[test]
fn test_app_error_display_rate_limit() {
    let error = AppError::RateLimitExceeded {
        message: "Too Many Attempts.".to_string(),
        body: Some(json!({"message": "Too Many Attempts."})),
    };
    assert_eq!(error.to_string(), "rate limit exceeded: Too Many Attempts.");
    assert_eq!(error.status_code(), Some(StatusCode::TOO_MANY_REQUESTS));
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: "The sku field is required.".to_string(),
        body: None,
    };
    assert_eq!(
        error.to_string(),
        "api error (422): The sku field is required."
    );
    assert_eq!(error.status_code(), Some(StatusCode::UNPROCESSABLE_ENTITY));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("organization_id must be a positive id".to_string());
    assert_eq!(
        error.to_string(),
        "invalid input: organization_id must be a positive id"
    );
    assert_eq!(error.status_code(), None);
    assert!(!error.is_authentication());
}

#[test]
fn test_app_error_display_deserialization() {
    let error = AppError::Deserialization("Invalid JSON".to_string());
    assert_eq!(error.to_string(), "deserialization error: Invalid JSON");
}

#[test]
fn test_app_error_from_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = AppError::from(json_error);
    assert!(matches!(error, AppError::Json(_)));
    assert!(error.to_string().starts_with("json error:"));
    assert!(error.source().is_some());
}

#[test]
fn test_app_error_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing .env");
    let error = AppError::from(io_error);
    assert!(matches!(error, AppError::Io(_)));
    assert_eq!(error.to_string(), "io error: missing .env");
}
