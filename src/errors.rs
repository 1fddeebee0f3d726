//! Error types for the configuration store and the page renderer
//!
//! Every failure the service can produce is a [`CloudError`]. The HTTP layer turns
//! each one into a 5xx JSON body carrying the message and a stable error code.
//!
//! ```rust
//! use cloudscape::errors::CloudError;
//!
//! let err = CloudError::Validation("name is too long (max 100 characters)".to_string());
//! assert!(err.is_client_error());
//! assert_eq!(err.error_code(), "VALIDATION_FAILED");
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum CloudError {
    /// A field violated its length constraint on write
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The underlying database rejected or failed the operation
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    /// Configuration not found by ID
    #[error("Cloud configuration {0} not found")]
    NotFound(i32),

    /// A page template asset is absent
    #[error("Template '{0}' is missing")]
    TemplateMissing(String),

    /// A template exists but could not be rendered
    #[error("Failed to render template '{name}': {reason}")]
    TemplateRender { name: String, reason: String },
}

pub type CloudResult<T> = Result<T, CloudError>;

impl CloudError {
    /// Errors caused by caller input rather than by the service
    pub fn is_client_error(&self) -> bool {
        matches!(self, CloudError::Validation(_) | CloudError::NotFound(_))
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            CloudError::Validation(_) => "VALIDATION_FAILED",
            CloudError::Storage(_) => "DATABASE_ERROR",
            CloudError::NotFound(_) => "NOT_FOUND",
            CloudError::TemplateMissing(_) => "TEMPLATE_MISSING",
            CloudError::TemplateRender { .. } => "TEMPLATE_RENDER_FAILED",
        }
    }
}

// Every variant is reported as 500. The client/server split only picks the log level.
impl IntoResponse for CloudError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            warn!("Request rejected: {}", self);
        } else {
            error!("Request failed: {}", self);
        }
        let body = Json(json!({
            "error": self.to_string(),
            "code": self.error_code(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
