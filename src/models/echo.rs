use super::timestamp_now;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Payload echoed back by `POST /api`.
///
/// `received` holds the decoded request body as-is: any JSON value, not
/// just objects. Key order and number representation survive the
/// decode/encode cycle.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct EchoResponse {
    #[schema(value_type = Object)]
    pub received: Value,
    pub timestamp: String,
}

impl EchoResponse {
    pub fn new(received: Value) -> Self {
        Self {
            received,
            timestamp: timestamp_now(),
        }
    }
}
