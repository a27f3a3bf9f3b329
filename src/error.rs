use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const PRICE_OUT_OF_RANGE: &str = "Price must be between 1 and 30";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("{0}")]
    Validation(&'static str),
    #[error("Pizza or Restaurant not found")]
    ReferenceNotFound,
    #[error("Failed to create RestaurantPizza: {0}")]
    Persistence(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<diesel::result::Error> for ApiError {
    fn from(e: diesel::result::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<diesel::r2d2::PoolError> for ApiError {
    fn from(e: diesel::r2d2::PoolError) -> Self {
        ApiError::Internal(format!("connection pool: {e}"))
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(e: actix_web::error::BlockingError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::RestaurantNotFound | ApiError::ReferenceNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::Persistence(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // the single-resource routes answer with "error", the creation route with "errors"
        let body = match self {
            ApiError::RestaurantNotFound => json!({ "error": "Restaurant not found" }),
            ApiError::Validation(message) => json!({ "errors": [message] }),
            ApiError::ReferenceNotFound => json!({ "errors": ["Pizza or Restaurant not found"] }),
            ApiError::Persistence(message) => {
                json!({ "errors": ["Failed to create RestaurantPizza", message] })
            }
            ApiError::Internal(cause) => {
                log::error!("request failed: {cause}");
                json!({ "error": "Internal server error" })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn restaurant_not_found_uses_singular_key() {
        let (status, body) = body_of(ApiError::RestaurantNotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Restaurant not found" }));
    }

    #[actix_web::test]
    async fn persistence_failure_surfaces_underlying_message() {
        let (status, body) = body_of(ApiError::Persistence("CHECK constraint failed".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "errors": ["Failed to create RestaurantPizza", "CHECK constraint failed"] })
        );
    }

    #[actix_web::test]
    async fn internal_errors_hide_the_cause() {
        let (status, body) = body_of(ApiError::Internal("disk I/O error".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
