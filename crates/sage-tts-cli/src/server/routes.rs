use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::server::handlers;
use crate::server::state::AppState;

/// The two routes the hosting platform's contract requires.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/invocations", post(handlers::invocations))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
