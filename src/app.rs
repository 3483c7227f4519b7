use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entries", get(handlers::list_entries).post(handlers::add_entry))
        .route("/api/today", get(handlers::get_today))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/trends", get(handlers::get_trends))
        .route("/api/chat", post(handlers::chat))
        .route("/api/crisis", get(handlers::get_crisis))
        .route("/api/meditations", get(handlers::get_meditations))
        .route("/api/forum", get(handlers::get_forum))
        .with_state(state)
}
