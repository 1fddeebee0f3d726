use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::HeaderValue, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use super::handlers::{cloud_data, health, index};
use crate::pages::PageRenderer;
use crate::services::ConfigStore;

/// Shared by every request. The store handle is created once at startup and lives
/// as long as the router does.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConfigStore>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn ConfigStore>, pages: PageRenderer) -> Self {
        Self {
            store,
            pages: Arc::new(pages),
        }
    }
}

pub fn create_app(state: AppState, cors_origin: Option<&str>) -> Result<Router> {
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin: {}", origin))?,
            )
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/", get(index::index))
        .route("/api/cloud-data", get(cloud_data::get_cloud_data))
        .route("/health", get(health::health_check))
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}
