use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::schedules::{CreateScheduleRequest, UpdateScheduleRequest},
    error::{AppError, AppResult},
    models::Schedule,
    services::schedule_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedules", get(list_schedules).post(create_schedule))
        .route("/schedule/{id}", get(get_schedule).put(update_schedule))
}

#[utoipa::path(
    get,
    path = "/schedules",
    responses(
        (status = 200, description = "All schedules", body = Vec<Schedule>)
    ),
    tag = "Schedules"
)]
pub async fn list_schedules(State(state): State<AppState>) -> AppResult<Json<Vec<Schedule>>> {
    let items = schedule_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 200, description = "Schedule created", body = String)
    ),
    tag = "Schedules"
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(payload): Json<CreateScheduleRequest>,
) -> AppResult<String> {
    let schedule = schedule_service::create(&state, payload).await?;
    tracing::info!(
        id = schedule.id,
        enterprise_id = schedule.enterprise_id,
        space_id = schedule.space_id,
        "schedule created"
    );
    Ok("Schedule correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/schedule/{id}",
    params(("id" = i32, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Zero or one schedules with that id", body = Vec<Schedule>)
    ),
    tag = "Schedules"
)]
pub async fn get_schedule(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Schedule>>> {
    let items = schedule_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/schedule/{id}",
    params(("id" = i32, Path, description = "Schedule ID")),
    request_body = UpdateScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated", body = String),
        (status = 404, description = "Schedule not found"),
    ),
    tag = "Schedules"
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> AppResult<String> {
    match schedule_service::update(&state, id, payload).await? {
        Some(_) => Ok("Schedule correctly edited".to_string()),
        None => Err(AppError::NotFound("Schedule")),
    }
}
