// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::catalog::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid data")]
    InvalidData,
    #[error("unauthorized")]
    Unauthorized,
    #[error("persistence failure: {0}")]
    Persistence(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, "Item not found".to_string())
            }
            ApiError::Store(StoreError::AlreadyExists) => {
                (StatusCode::BAD_REQUEST, "Item already exists".to_string())
            }
            ApiError::InvalidData => (StatusCode::BAD_REQUEST, "Invalid data".to_string()),
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized access".to_string())
            }
            ApiError::Persistence(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to persist catalog".to_string(),
            ),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
