use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Describes every route in [`ROUTE_TABLE`] with its response schemas.
/// Served as JSON at `/api-docs/openapi.json` and browsable through
/// Swagger UI at `/swagger-ui/`.
///
/// [`ROUTE_TABLE`]: crate::routes::ROUTE_TABLE
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::greeting,
        crate::routes::health::health,
        crate::routes::api::api_status,
        crate::routes::api::echo,
    ),
    components(
        schemas(
            crate::models::HealthResponse,
            crate::models::MessageResponse,
            crate::models::EchoResponse,
            crate::models::ErrorResponse
        )
    ),
    tags(
        (name = "Greeting", description = "Root greeting"),
        (name = "Health Check", description = "Liveness and readiness probe"),
        (name = "API", description = "API status and JSON echo")
    ),
    info(
        description = "Minimal JSON service with greeting, health and echo endpoints",
        title = "Echo API",
    )
)]
pub struct ApiDoc;
