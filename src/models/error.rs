use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const INVALID_JSON: &str = "Invalid JSON";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
pub const PAYLOAD_TOO_LARGE: &str = "Payload too large";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn invalid_json() -> Self {
        Self::new(INVALID_JSON)
    }

    pub fn method_not_allowed() -> Self {
        Self::new(METHOD_NOT_ALLOWED)
    }

    pub fn payload_too_large() -> Self {
        Self::new(PAYLOAD_TOO_LARGE)
    }
}
