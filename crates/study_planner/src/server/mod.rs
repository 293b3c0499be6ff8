use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::server::endpoints::{assets, generate, status};
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Browser UI
    let ui_router = Router::new()
        .route("/", get(assets::get_index))
        .route("/script.js", get(assets::get_script))
        .route("/style.css", get(assets::get_stylesheet));

    Router::new()
        .route("/health", get(status::get_health))
        .route("/generate", post(generate::post_generate))
        .merge(ui_router)
        .with_state(app_state)
}
