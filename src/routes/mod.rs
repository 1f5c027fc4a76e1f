use crate::error::ApiError;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

/// # Greeting Endpoint
///
/// `GET /` answers with a fixed greeting and a timestamp.
pub mod root;

/// # Health Check Endpoint
///
/// `GET /health` is the liveness/readiness probe. It performs no dependency
/// checks and always answers 200.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789Z",
///   "version": "1.0.0"
/// }
/// ```
pub mod health;

/// # API Endpoints
///
/// - `GET /api`: status message
/// - `POST /api`: echoes any JSON document back under `received`
/// - any other method: 405 `{"error": "Method not allowed"}`
pub mod api;


/// HTTP methods the service routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    pub fn as_method(self) -> Method {
        match self {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }

    pub fn from_method(method: &Method) -> Option<Self> {
        if method == Method::GET {
            Some(RouteMethod::Get)
        } else if method == Method::POST {
            Some(RouteMethod::Post)
        } else {
            None
        }
    }
}

/// One handler per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Greeting,
    Health,
    ApiStatus,
    Echo,
}

impl Endpoint {
    /// Actix route for this endpoint, guarded on `method`.
    pub fn route(self, method: RouteMethod) -> actix_web::Route {
        let route = web::route().method(method.as_method());
        match self {
            Endpoint::Greeting => route.to(root::greeting),
            Endpoint::Health => route.to(health::health),
            Endpoint::ApiStatus => route.to(api::api_status),
            Endpoint::Echo => route.to(api::echo),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: RouteMethod,
    pub path: &'static str,
    pub endpoint: Endpoint,
    pub description: &'static str,
}

/// Every `(method, path)` pair the service answers. Anything not listed
/// here gets a 405.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        method: RouteMethod::Get,
        path: "/",
        endpoint: Endpoint::Greeting,
        description: "Hello message",
    },
    RouteEntry {
        method: RouteMethod::Get,
        path: "/health",
        endpoint: Endpoint::Health,
        description: "Health check",
    },
    RouteEntry {
        method: RouteMethod::Get,
        path: "/api",
        endpoint: Endpoint::ApiStatus,
        description: "API test",
    },
    RouteEntry {
        method: RouteMethod::Post,
        path: "/api",
        endpoint: Endpoint::Echo,
        description: "Echo JSON data",
    },
];

/// Looks up the endpoint registered for a method/path pair.
pub fn resolve(method: &Method, path: &str) -> Option<Endpoint> {
    let method = RouteMethod::from_method(method)?;
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.method == method && entry.path == path)
        .map(|entry| entry.endpoint)
}

/// Distinct paths in table order.
pub fn paths() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = Vec::new();
    for entry in ROUTE_TABLE {
        if !paths.contains(&entry.path) {
            paths.push(entry.path);
        }
    }
    paths
}

/// Fallback for any method/path pair missing from [`ROUTE_TABLE`].
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(ApiError::UnsupportedMethod)
}

/// # Route Configuration
///
/// Mounts [`ROUTE_TABLE`] as one actix resource per path. Each resource,
/// and the application as a whole, falls back to [`method_not_allowed`].
///
/// ```text
/// GET  /        - Hello message
/// GET  /health  - Health check
/// GET  /api     - API test
/// POST /api     - Echo JSON data
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    for path in paths() {
        let resource = ROUTE_TABLE
            .iter()
            .filter(|entry| entry.path == path)
            .fold(web::resource(path), |resource, entry| {
                resource.route(entry.endpoint.route(entry.method))
            });
        cfg.service(resource.default_service(web::to(method_not_allowed)));
    }
    cfg.default_service(web::to(method_not_allowed));
}
