use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder};

/// # Health Check Endpoint
///
/// Returns `healthy`, the build version and a timestamp. Never reads the
/// request body and never calls out, so probes stay fast.
///
/// ## Response
///
/// - **200 OK**: always
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health Check"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
