use super::timestamp_now;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GREETING: &str = "Hello from Rust + Kubernetes + Skaffold with hot reload!";
pub const API_READY: &str = "API endpoint is working";

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: timestamp_now(),
        }
    }

    /// Response for `GET /`.
    pub fn greeting() -> Self {
        Self::new(GREETING)
    }

    /// Response for `GET /api`.
    pub fn api_ready() -> Self {
        Self::new(API_READY)
    }
}
