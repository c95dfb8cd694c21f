/// Album Service - HTTP server
///
/// Photo-album backend: image uploads to an S3-compatible host, metadata in
/// Postgres, PIN-gated gallery login.
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use album_service::config::CorsConfig;
use album_service::db::PgPhotoStore;
use album_service::services::{AccessGate, PhotoService, S3ImageStore};
use album_service::{routes, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;

    tracing::info!("Starting album-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool and schema
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let image_store = S3ImageStore::from_config(&config.s3)
        .await
        .context("failed to initialize the image store client")?;

    let photo_service = web::Data::new(PhotoService::new(
        Arc::new(PgPhotoStore::new(pool)),
        Arc::new(image_store),
        config.upload.clone(),
    ));
    let access_gate = web::Data::new(AccessGate::new(config.auth.pin.clone()));

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("album-service listening on {}", bind_address);

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(photo_service.clone())
            .app_data(access_gate.clone())
            .wrap(build_cors(&cors_config))
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("album-service shutting down");
    Ok(())
}

fn build_cors(config: &CorsConfig) -> Cors {
    if config.allowed_origins.trim() == "*" {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);
    for origin in config
        .allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
    {
        cors = cors.allowed_origin(origin);
    }
    cors
}
