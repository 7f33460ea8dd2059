use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while accepting a lead submission.
///
/// Client-side constraint violations never reach this service; the two
/// variants here are the only failures the endpoint reports.
#[derive(Debug, Error)]
pub enum LeadError {
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),

    #[error("email dispatch failed: {0}")]
    DeliveryFailed(#[from] anyhow::Error),
}

impl IntoResponse for LeadError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LeadError::MissingRequiredField(_) => (
                StatusCode::BAD_REQUEST,
                "All required fields must be filled in.".to_string(),
            ),
            LeadError::DeliveryFailed(e) => {
                tracing::error!("Failed to deliver lead email: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to send message. Please try again later.".to_string(),
                )
            }
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
