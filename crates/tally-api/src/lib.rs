//! tally-api: HTTP API for the search history and budget services.

pub mod budget;
pub mod error;
pub mod history;
mod validate;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use tally_core::{Config, Database};

/// Shared state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<Database>,
}

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/history", post(history::create))
        .route("/api/history/user/{user_id}", get(history::list_by_user))
        .route(
            "/api/history/entry/{id}",
            get(history::get_entry).delete(history::delete_entry),
        )
        .route("/api/get-all-budget-ids", get(budget::list_ids))
        .route("/api/create-budget", post(budget::create))
        .route("/api/save-budget", post(budget::save))
        .route("/api/swap-budget", post(budget::swap))
        .route("/api/load-budget/{id}", get(budget::load))
        .route("/api/delete-budget/{id}", delete(budget::delete))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
