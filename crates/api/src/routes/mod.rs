pub mod catalog;
pub mod generate;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree. All paths are mounted at the root; the
/// frontend calls them without a versioned prefix.
///
/// ```text
/// GET  /            service banner
/// GET  /health      liveness probe
/// GET  /styles      visual preset catalog
/// GET  /call-types  call direction catalog
/// POST /generate    build a screenshot description (stub)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(catalog::router())
        .merge(generate::router())
}
