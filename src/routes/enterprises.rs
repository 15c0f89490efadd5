use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::enterprises::{CreateEnterpriseRequest, UpdateEnterpriseRequest},
    error::{AppError, AppResult},
    models::Enterprise,
    services::enterprise_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/enterprises",
            get(list_enterprises).post(create_enterprise),
        )
        .route(
            "/enterprise/{id}",
            get(get_enterprise).put(update_enterprise),
        )
}

#[utoipa::path(
    get,
    path = "/enterprises",
    responses(
        (status = 200, description = "All enterprises with nested brands and schedules", body = Vec<Enterprise>)
    ),
    tag = "Enterprises"
)]
pub async fn list_enterprises(State(state): State<AppState>) -> AppResult<Json<Vec<Enterprise>>> {
    let items = enterprise_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/enterprises",
    request_body = CreateEnterpriseRequest,
    responses(
        (status = 200, description = "Enterprise created", body = String)
    ),
    tag = "Enterprises"
)]
pub async fn create_enterprise(
    State(state): State<AppState>,
    Json(payload): Json<CreateEnterpriseRequest>,
) -> AppResult<String> {
    let enterprise = enterprise_service::create(&state, payload).await?;
    tracing::info!(id = enterprise.id, "enterprise created");
    Ok("Enterprise correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/enterprise/{id}",
    params(("id" = i32, Path, description = "Enterprise ID")),
    responses(
        (status = 200, description = "Zero or one enterprises with that id", body = Vec<Enterprise>)
    ),
    tag = "Enterprises"
)]
pub async fn get_enterprise(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Enterprise>>> {
    let items = enterprise_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/enterprise/{id}",
    params(("id" = i32, Path, description = "Enterprise ID")),
    request_body = UpdateEnterpriseRequest,
    responses(
        (status = 200, description = "Enterprise updated", body = String),
        (status = 404, description = "Enterprise not found"),
    ),
    tag = "Enterprises"
)]
pub async fn update_enterprise(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEnterpriseRequest>,
) -> AppResult<String> {
    match enterprise_service::update(&state, id, payload).await? {
        Some(_) => Ok("Enterprise correctly edited".to_string()),
        None => Err(AppError::NotFound("Enterprise")),
    }
}
