use crate::server::error::ApiError;
use crate::server::handlers;
use crate::server::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.settings.request.max_body_bytes;

    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze/text", post(handlers::analyze_text))
        .route("/analyze/text/keywords", post(handlers::text_keywords))
        .route("/analyze/text/summary", post(handlers::text_summary))
        .route("/analyze/audio", post(handlers::analyze_audio))
        .route("/analyze/image", post(handlers::analyze_image))
        .route("/analyze/image/palette", post(handlers::image_palette))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}
