use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::error::ApiError;
use crate::models::{EchoResponse, ErrorResponse, MessageResponse};
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use futures::StreamExt;
use serde_json::Value;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Deepest array/object nesting the decoder accepts (serde_json's recursion
/// limit). Deeper documents are answered with 400 instead of growing the
/// worker's stack without bound.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Upper bound on the `POST /api` body, registered as app data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_BODY_BYTES)
    }
}

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "API is reachable", body = MessageResponse)
    ),
    tag = "API"
)]
pub async fn api_status() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::api_ready())
}

/// # Echo Endpoint
///
/// Decodes the request body as a JSON document of any shape and returns it
/// under `received`. The `Content-Type` header is not checked.
///
/// ## Responses
/// - **200 OK**: `{"received": <body>, "timestamp": "..."}`
/// - **400 Bad Request**: `{"error": "Invalid JSON"}`
/// - **413 Payload Too Large**: `{"error": "Payload too large"}`
///
/// ## Example
/// ```text
/// curl -X POST localhost:8080/api -d '{"name":"Test"}'
/// ```
#[utoipa::path(
    post,
    path = "/api",
    request_body(content = Value, description = "Any JSON document"),
    responses(
        (status = 200, description = "Body echoed back", body = EchoResponse),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "Body exceeds the size limit", body = ErrorResponse)
    ),
    tag = "API"
)]
pub async fn echo(req: HttpRequest, payload: web::Payload) -> Result<HttpResponse, ApiError> {
    let limit = req.app_data::<BodyLimit>().copied().unwrap_or_default();
    let body = read_body(payload, limit).await?;
    let received = decode_payload(&body)?;
    Ok(HttpResponse::Ok().json(EchoResponse::new(received)))
}

/// Collects the request body, stopping as soon as it grows past `limit`.
async fn read_body(mut payload: web::Payload, limit: BodyLimit) -> Result<web::Bytes, ApiError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            log::debug!("Request body stream failed: {}", e);
            ApiError::InvalidRequestBody
        })?;
        if body.len() + chunk.len() > limit.0 {
            log::debug!("Request body exceeds {} bytes", limit.0);
            return Err(ApiError::PayloadTooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Parses `bytes` as a single JSON value. A panic inside the decoder is
/// reported the same way as malformed input.
pub fn decode_payload(bytes: &[u8]) -> Result<Value, ApiError> {
    match catch_unwind(AssertUnwindSafe(|| serde_json::from_slice::<Value>(bytes))) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            log::debug!("Rejected request body: {}", e);
            Err(ApiError::InvalidRequestBody)
        }
        Err(_) => {
            log::warn!("JSON decoder panicked on a {} byte body", bytes.len());
            Err(ApiError::InvalidRequestBody)
        }
    }
}
