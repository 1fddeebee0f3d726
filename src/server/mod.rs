pub mod app;
pub mod handlers;

use std::sync::Arc;

use anyhow::Result;
use clap::Subcommand;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::ServerConfig;
use crate::database::{connection::*, migrations::Migrator};
use crate::services::SqlConfigStore;

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateDirection {
    Up,
    Down,
    Fresh,
}

pub async fn open_database(database_path: &str) -> Result<DatabaseConnection> {
    let database_url = get_database_url(Some(database_path));
    let db = establish_connection(&database_url).await?;
    Ok(db)
}

pub async fn start_server(config: &ServerConfig) -> Result<()> {
    let db = open_database(&config.database).await?;

    setup_database(&db).await?;
    info!("Database migrations completed");

    let state = app::AppState::new(
        Arc::new(SqlConfigStore::new(db)),
        config.page_renderer(),
    );
    let app = app::create_app(state, config.cors_origin.as_deref())?;

    log_routes();

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

fn log_routes() {
    info!("HTTP Endpoints:");
    info!("  /                - Cloud animation page");
    info!("  /api/cloud-data  - Default animation parameters (JSON)");
    info!("  /health          - Health check");
}

pub async fn migrate_database(database_path: &str, direction: MigrateDirection) -> Result<()> {
    let db = open_database(database_path).await?;

    match direction {
        MigrateDirection::Up => {
            info!("Running migrations up");
            Migrator::up(&db, None).await?;
        }
        MigrateDirection::Down => {
            info!("Running migrations down");
            Migrator::down(&db, None).await?;
        }
        MigrateDirection::Fresh => {
            info!("Dropping all tables and reapplying migrations");
            Migrator::fresh(&db).await?;
        }
    }

    info!("Database migration completed");
    Ok(())
}
