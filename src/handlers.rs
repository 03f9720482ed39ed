use crate::controller::ViewSnapshot;
use crate::errors::AppError;
use crate::state::AppState;
use crate::view::{CloseVia, CompletionForm, HabitForm, Tab};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfirmForm {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct CloseForm {
    #[serde(default)]
    pub via: String,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.controller.render().await)
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.controller.snapshot().await)
}

pub async fn show_tab(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Redirect, AppError> {
    let tab = Tab::parse(&tab).ok_or_else(|| AppError::not_found(format!("unknown tab '{tab}'")))?;
    state.controller.show_tab(tab).await;
    Ok(home())
}

pub async fn create_habit(State(state): State<AppState>, Form(form): Form<HabitForm>) -> Redirect {
    state.controller.submit_habit(form).await;
    home()
}

pub async fn request_delete(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.controller.request_delete(id).await;
    home()
}

pub async fn confirm(State(state): State<AppState>, Form(form): Form<ConfirmForm>) -> Redirect {
    state.controller.answer(form.answer.trim() == "yes").await;
    home()
}

pub async fn open_completion(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.controller.open_completion(id).await;
    home()
}

pub async fn close_modal(
    State(state): State<AppState>,
    Form(form): Form<CloseForm>,
) -> Result<Redirect, AppError> {
    let via = CloseVia::parse(form.via.trim())
        .ok_or_else(|| AppError::bad_request("via must be 'close', 'backdrop' or 'escape'"))?;
    state.controller.close_modal(via).await;
    Ok(home())
}

pub async fn submit_completion(
    State(state): State<AppState>,
    Form(form): Form<CompletionForm>,
) -> Redirect {
    state.controller.submit_completion(form).await;
    home()
}

pub async fn view_history(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.controller.view_history(id).await;
    home()
}

pub async fn close_history(State(state): State<AppState>) -> Redirect {
    state.controller.close_history().await;
    home()
}

pub async fn dismiss_notification(State(state): State<AppState>, Path(id): Path<u64>) -> Redirect {
    state.controller.dismiss_notification(id).await;
    home()
}

fn home() -> Redirect {
    Redirect::to("/")
}
