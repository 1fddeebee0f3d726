use axum::{extract::State, response::Html};
use tracing::debug;

use crate::errors::CloudResult;
use crate::server::app::AppState;

pub async fn index(State(state): State<AppState>) -> CloudResult<Html<String>> {
    let body = state.pages.render_index().await?;
    debug!("Rendered index page ({} bytes)", body.len());
    Ok(Html(body))
}
