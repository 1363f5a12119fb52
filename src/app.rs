use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/today", get(handlers::get_today))
        .route("/api/steps", post(handlers::set_steps))
        .route("/api/water", post(handlers::set_water))
        .route("/api/habit", post(handlers::toggle_habit))
        .route("/api/side-quest", post(handlers::toggle_side_quest))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
