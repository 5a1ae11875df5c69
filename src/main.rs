mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod opentelemetry;
mod services;

use config::{AppConfig, StorageBackend};
use container::Container;
use infrastructure::databases::surrealdb;

use actix_web::HttpServer;
use include_dir::{Dir, include_dir};
use std::sync::Arc;
use surrealdb_migrations::MigrationRunner;
use thiserror::Error;

#[cfg(test)]
mod tests;

const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    OTel(#[from] opentelemetry::OTelError),
}

async fn run() -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let provider = opentelemetry::configure(&config.service, &config.logging)?;

    let container = match config.storage.backend {
        StorageBackend::SurrealDb => {
            let conn = surrealdb::connect(&config.surrealdb).await?;

            if config.surrealdb.migration {
                MigrationRunner::new(&conn)
                    .load_files(&MIGRATIONS_DIR)
                    .up()
                    .await
                    .map_err(|err| AppError::Migration(err.to_string()))?;
            }

            Container::surrealdb(conn)
        }
        StorageBackend::Memory => {
            tracing::warn!("accounts are kept in memory and lost on shutdown");
            Container::in_memory()
        }
    };

    let container = Arc::new(container);
    let allowed_origins = config.http.allowed_origins.clone();

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        backend = ?config.storage.backend,
        "starting {}",
        config.service.name
    );

    HttpServer::new(move || app::create(Arc::clone(&container), &allowed_origins))
        .bind((config.http.host.as_str(), config.http.port))?
        .run()
        .await?;

    opentelemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
