//! Route definitions

use std::path::Path;

use axum::{Router, routing::post};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::{error::panic_response, handlers, state::AppState};

/// Create the router: the lookup API plus static front-end files from `static_dir`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/get-weather", post(handlers::weather::get_weather))
        // `/` resolves to index.html, anything else is looked up under static_dir
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}
