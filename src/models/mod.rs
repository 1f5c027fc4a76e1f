use chrono::{SecondsFormat, Utc};

/// # Health Status Response
///
/// Liveness/readiness payload returned by `GET /health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "version": "1.0.0"
/// }
/// ```
pub mod health;

/// # Plain Message Response
///
/// Greeting and API status payloads for `GET /` and `GET /api`.
pub mod message;

/// # Echo Response
///
/// Wraps the JSON value a client posted to `/api`.
pub mod echo;

/// # Error Response
///
/// Body returned for rejected requests: `{"error": "..."}`.
pub mod error;

pub use echo::EchoResponse;
pub use error::ErrorResponse;
pub use health::HealthResponse;
pub use message::MessageResponse;

/// Current instant as an RFC 3339 UTC string with nanosecond precision.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
