use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the main API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health_check))
        // Catalogue search
        .route("/search", get(handlers::search_quiz_items))
        // Catalogue writes and lookups
        .route("/add-quiz-item", post(handlers::add_quiz_item))
        .route("/quiz-items/:id", get(handlers::get_quiz_item))
        .route(
            "/quiz-items/:id/sibling",
            get(handlers::get_quiz_item_sibling),
        )
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
}
