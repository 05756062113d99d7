use crate::errors::AppError;
use crate::models::{
    AnalyticsResponse, DoseEvent, HistoryQuery, LogInRequest, MarkDoseRequest, Medicine,
    NewMedicine, SignUpRequest, UserProfile,
};
use crate::reminders::{check_due_reminders, pending_schedule};
use crate::state::AppState;
use crate::stats::build_analytics;
use crate::ui::{render_index, render_login};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn login_page() -> Html<&'static str> {
    Html(render_login())
}

pub async fn list_medicines(State(state): State<AppState>) -> Json<Vec<Medicine>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.registry.list().to_vec())
}

pub async fn add_medicine(
    State(state): State<AppState>,
    Json(payload): Json<NewMedicine>,
) -> Result<(StatusCode, Json<Medicine>), AppError> {
    validate(&payload)?;
    let mut tracker = state.tracker.lock().await;
    let medicine = tracker.registry.add(payload, Local::now());
    info!(medicine_id = medicine.id, "added medicine {}", medicine.name);
    Ok((StatusCode::CREATED, Json(medicine)))
}

pub async fn update_medicine(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<NewMedicine>,
) -> Result<Json<Medicine>, AppError> {
    validate(&payload)?;
    let mut tracker = state.tracker.lock().await;
    let medicine = tracker
        .registry
        .replace(id, payload, Local::now())
        .ok_or_else(|| AppError::medicine_not_found(id))?;
    info!(old_id = id, medicine_id = medicine.id, "edited medicine {}", medicine.name);
    Ok(Json(medicine))
}

pub async fn delete_medicine(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    let mut tracker = state.tracker.lock().await;
    let removed = tracker
        .registry
        .remove(id)
        .ok_or_else(|| AppError::medicine_not_found(id))?;
    info!(medicine_id = id, "deleted medicine {}", removed.name);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn mark_dose(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<MarkDoseRequest>,
) -> Result<(StatusCode, Json<DoseEvent>), AppError> {
    let mut tracker = state.tracker.lock().await;
    let medicine = tracker
        .registry
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::medicine_not_found(id))?;
    let event = tracker.log.append(&medicine, payload.status, Local::now());
    info!(
        medicine_id = id,
        status = ?event.status,
        "recorded dose of {} {}",
        medicine.name,
        medicine.dosage
    );
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get_schedule(State(state): State<AppState>) -> Json<Vec<Medicine>> {
    let tracker = state.tracker.lock().await;
    let pending = pending_schedule(tracker.registry.list(), Local::now());
    Json(pending.into_iter().cloned().collect())
}

pub async fn get_reminders(State(state): State<AppState>) -> Json<Vec<Medicine>> {
    let tracker = state.tracker.lock().await;
    let due = check_due_reminders(tracker.registry.list(), tracker.log.list(), Local::now());
    Json(due.into_iter().cloned().collect())
}

pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<Vec<DoseEvent>> {
    let tracker = state.tracker.lock().await;
    Json(tracker.log.history(query.status))
}

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let tracker = state.tracker.lock().await;
    Json(build_analytics(tracker.registry.list(), tracker.log.list()))
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<UserProfile>), AppError> {
    let mut tracker = state.tracker.lock().await;
    let user = tracker.accounts.sign_up(
        &payload.name,
        &payload.email,
        &payload.password,
        &payload.confirm_password,
    )?;
    info!("created account for {}", user.email);
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn log_in(
    State(state): State<AppState>,
    Json(payload): Json<LogInRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let tracker = state.tracker.lock().await;
    let user = tracker.accounts.log_in(&payload.email, &payload.password)?;
    info!("{} logged in", user.email);
    Ok(Json(user))
}

fn validate(payload: &NewMedicine) -> Result<(), AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    if payload.dosage.trim().is_empty() {
        return Err(AppError::bad_request("dosage must not be empty"));
    }
    Ok(())
}
