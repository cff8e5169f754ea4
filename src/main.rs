use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_service::config::AppConfig;
use customer_service::domain::customer::CustomerService;
use customer_service::{api, db, metrics};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_service=debug")),
        )
        .init();

    tracing::info!("🚀 Starting customer service");

    // === 1. Load configuration ===
    let config = AppConfig::load()?;
    tracing::info!(
        backend = config.database.backend.as_str(),
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // === 2. Select the data-access backend ===
    let dao = db::connect(&config.database).await?;

    // === 3. Metrics registry ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metric families", metrics.registry().gather().len());

    // === 4. Customer service shared by all workers ===
    let service = web::Data::new(CustomerService::new(dao).with_metrics(metrics.clone()));
    let metrics = web::Data::new(metrics);
    let backend = web::Data::new(config.database.backend);

    // === 5. HTTP server ===
    tracing::info!(
        "📡 Serving customer API on http://{}:{}{}",
        config.server.host,
        config.server.port,
        api::CUSTOMERS_PATH
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .app_data(metrics.clone())
            .app_data(backend.clone())
            .configure(api::configure)
    })
    .bind((config.server.host.as_str(), config.server.port))?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await?;

    tracing::info!("Customer service stopped");
    Ok(())
}
