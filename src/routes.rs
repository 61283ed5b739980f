use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/news", get(handlers::news_list))
        .route("/news/:slug", get(handlers::news_detail))
        .route("/studio", get(handlers::studio_redirect))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
