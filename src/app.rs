use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/problems",
            get(handlers::list_problems).post(handlers::create_problem),
        )
        .route("/api/problems/:id", delete(handlers::delete_problem))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/platforms", get(handlers::list_platforms))
        .with_state(state)
}
