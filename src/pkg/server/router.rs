use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::home::{home, not_found};
use super::handlers::probes::health;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/jobs", post(handlers::jobs::create))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!("request handler panicked: {}", detail);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(serde_json::json!({ "error": "Something went wrong!" })),
    )
        .into_response()
}
