use super::timestamp_now;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status string reported while the process is able to serve requests.
pub const HEALTHY: &str = "healthy";

/// Build version reported by the health probe.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// # Health Status Response
///
/// Returned by the liveness/readiness probe. Built without touching any
/// external resource, so it can always be answered immediately.
///
/// ## Fields
/// - `status`: always `"healthy"`
/// - `timestamp`: RFC 3339 instant the response was built
/// - `version`: crate version baked in at compile time
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp: timestamp_now(),
            version: VERSION.to_string(),
        }
    }
}
