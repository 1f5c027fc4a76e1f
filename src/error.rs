//! Request-level error taxonomy.
//!
//! Every variant is terminal and answered locally with a JSON
//! [`ErrorResponse`] body; nothing here is retried by the service.

use crate::models::ErrorResponse;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body of `POST /api` was not a JSON document.
    #[error("Invalid JSON")]
    InvalidRequestBody,

    /// Body of `POST /api` exceeded the configured size limit.
    #[error("Payload too large")]
    PayloadTooLarge,

    /// No handler is registered for the method/path pair.
    #[error("Method not allowed")]
    UnsupportedMethod,
}

impl ApiError {
    pub fn body(&self) -> ErrorResponse {
        match self {
            ApiError::InvalidRequestBody => ErrorResponse::invalid_json(),
            ApiError::PayloadTooLarge => ErrorResponse::payload_too_large(),
            ApiError::UnsupportedMethod => ErrorResponse::method_not_allowed(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequestBody => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
