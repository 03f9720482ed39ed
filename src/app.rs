use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/view", get(handlers::get_view))
        .route("/tab/:tab", post(handlers::show_tab))
        .route("/habits", post(handlers::create_habit))
        .route("/habits/:id/delete", post(handlers::request_delete))
        .route("/habits/:id/complete", post(handlers::open_completion))
        .route("/habits/:id/history", post(handlers::view_history))
        .route("/history/close", post(handlers::close_history))
        .route("/confirm", post(handlers::confirm))
        .route("/modal/close", post(handlers::close_modal))
        .route("/completions", post(handlers::submit_completion))
        .route("/notifications/:id/dismiss", post(handlers::dismiss_notification))
        .with_state(state)
}
