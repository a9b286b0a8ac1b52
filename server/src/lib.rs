//! Host server for the task front-end.
//!
//! Serves the compiled egui bundle and injects the tasks API location into
//! `index.html`, so one front-end build can talk to any backend.

pub mod assets;
pub mod config;

use axum::{Router, extract::State, routing::get};
use rust_embed::RustEmbed;
use std::sync::Arc;
use task_api::{ApiError, FrontendConfig};
use tower_http::trace::TraceLayer;

use crate::assets::{IndexPage, static_handler};

/// Front-end bundle staged by build.rs.
#[derive(RustEmbed)]
#[folder = "$TASK_FRONTEND_DIST"]
pub struct FrontendAssets;

/// Routes: `/` serves the page with `frontend` injected, everything else the bundle.
pub fn router(frontend: FrontendConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .fallback(static_handler::<FrontendAssets>)
        .with_state(Arc::new(frontend))
        .layer(TraceLayer::new_for_http())
}

async fn index(State(frontend): State<Arc<FrontendConfig>>) -> IndexPage<FrontendAssets> {
    IndexPage::new(frontend.as_ref().clone())
}

/// List tasks once and log the outcome. Returns the number of tasks.
pub async fn probe_api(frontend: &FrontendConfig) -> Result<usize, ApiError> {
    let client = frontend.client();
    match client.get_tasks().await {
        Ok(tasks) => {
            tracing::info!(url = %client.tasks_url(), count = tasks.len(), "Tasks API reachable");
            Ok(tasks.len())
        }
        Err(e) => {
            tracing::warn!(url = %client.tasks_url(), error = %e, "Tasks API probe failed");
            Err(e)
        }
    }
}
