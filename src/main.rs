use actix_web::{App, HttpServer, middleware::Logger};
use echo_api::config::ServerConfig;
use echo_api::openapi::ApiDoc;
use echo_api::routes::ROUTE_TABLE;
use echo_api::routes::api::BodyLimit;
use echo_api::{logging, routes};
use std::io;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Echo API Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - The JSON routes from [`ROUTE_TABLE`]
/// - Swagger UI at `/swagger-ui/`, spec at `/api-docs/openapi.json`
/// - Access logging through the `log` -> tracing bridge
///
/// # Configuration
/// - Binds `0.0.0.0:8080` unless `HOST`/`PORT` say otherwise
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env().map_err(io::Error::other)?;
    logging::init_logging(&config.log_filter).map_err(io::Error::other)?;

    let (host, port) = config.bind_address();
    log::info!("Server starting on {}:{}", host, port);
    log::info!("Available endpoints:");
    for entry in ROUTE_TABLE {
        log::info!(
            "  {:<5}{:<10} - {}",
            entry.method.as_str(),
            entry.path,
            entry.description
        );
    }

    let max_body_bytes = config.max_body_bytes;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(BodyLimit(max_body_bytes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(routes::configure)
    })
    .shutdown_timeout(config.shutdown_timeout_secs);

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind(config.bind_address())?.run().await
}
