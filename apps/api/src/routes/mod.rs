pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Posting acquisition and segmentation preview
        .route(
            "/api/v1/postings/fetch",
            post(handlers::handle_fetch_posting),
        )
        .route(
            "/api/v1/postings/parse",
            post(handlers::handle_parse_posting),
        )
        // Generation
        .route("/api/v1/cover-letters", post(handlers::handle_cover_letter))
        .route(
            "/api/v1/cover-letters/export",
            post(handlers::handle_export),
        )
        .route("/api/v1/ats-reports", post(handlers::handle_ats_report))
        .with_state(state)
}
