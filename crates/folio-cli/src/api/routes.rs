//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .route("/projects", get(handlers::list_projects))
        .route("/projects/{name}", get(handlers::project_info))
        .route("/skills", get(handlers::skills))
        .route("/background", get(handlers::background))
        .route("/career-advice", get(handlers::career_advice))
        .route("/contact", get(handlers::contact))
        .route("/tech-recommendations", get(handlers::tech_recommendations))
        .route(
            "/project-recommendations",
            get(handlers::project_recommendations),
        )
        .route("/status", get(handlers::status))
        .route("/switch-model", post(handlers::switch_model))
        .route("/docs", get(handlers::docs));

    Router::new()
        .route("/", get(handlers::index))
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
