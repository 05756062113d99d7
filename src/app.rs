use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login_page))
        .route(
            "/api/medicines",
            get(handlers::list_medicines).post(handlers::add_medicine),
        )
        .route(
            "/api/medicines/:id",
            put(handlers::update_medicine).delete(handlers::delete_medicine),
        )
        .route("/api/medicines/:id/doses", post(handlers::mark_dose))
        .route("/api/schedule", get(handlers::get_schedule))
        .route("/api/reminders", get(handlers::get_reminders))
        .route("/api/history", get(handlers::get_history))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/signup", post(handlers::sign_up))
        .route("/api/login", post(handlers::log_in))
        .with_state(state)
}
