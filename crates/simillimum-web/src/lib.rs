//! simillimum-web library root.
//!
//! Exposes the router and its state so integration tests can drive the
//! HTTP surface without binding a socket.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get, post};

use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // HTML form surface
        .route("/", get(routes::page::show_page))
        .route("/symptoms", post(routes::page::add_symptom))
        .route("/symptoms/{id}/delete", post(routes::page::remove_symptom))
        .route("/analysis", post(routes::page::trigger_analysis))
        // JSON API
        .route("/api/session", get(routes::api::get_session))
        .route("/api/symptoms", post(routes::api::add_symptom))
        .route("/api/symptoms/{id}", delete(routes::api::remove_symptom))
        .route("/api/analysis", post(routes::api::trigger_analysis))
        .layer(axum_mw::from_fn(middleware::audit::request_log))
        .with_state(state)
}
