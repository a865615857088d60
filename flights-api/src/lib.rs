use axum::{http::Method, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod flights;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState, api_base: &str) -> Router {
    // Open to any origin, read-only surface
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    let base = api_base.trim_matches('/');
    let api = if base.is_empty() {
        flights::routes()
    } else {
        Router::new().nest(&format!("/{}", base), flights::routes())
    };

    api.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
