use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/log", post(handlers::log_record_form))
        .route("/api/exercises", get(handlers::list_exercises))
        .route("/api/progress", get(handlers::get_progress))
        .route("/api/log", post(handlers::log_record))
        .with_state(state)
}
