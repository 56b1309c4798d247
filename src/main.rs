use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use match_dashboard::config::Settings;
use match_dashboard::core::Dataset;
use match_dashboard::routes::{self, dashboard::AppState};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }

    info!("Starting match dashboard...");

    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Configuration loaded successfully");

    // The dashboard has nothing to serve without its data
    let path = settings.dataset.path.clone();
    let dataset = tokio::task::spawn_blocking(move || Dataset::load(path))
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .map_err(|e| {
            error!("Failed to load dataset {}: {}", settings.dataset.path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?;

    info!(
        "Dataset ready: {} rows across {} cities",
        dataset.table().len(),
        dataset.index().len()
    );

    let app_state = AppState {
        dataset: Arc::new(dataset),
        slider: settings.slider,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
