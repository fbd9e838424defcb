//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API currently exposes only the greeter at `/`. Board configuration
//! runs in the embedding client and never reaches the server. Cross-origin
//! requests are accepted from anywhere.

pub mod greeter;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(greeter::welcome))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
