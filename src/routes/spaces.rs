use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::spaces::{CreateSpaceRequest, UpdateSpaceRequest},
    error::{AppError, AppResult},
    models::Space,
    services::space_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spaces", get(list_spaces).post(create_space))
        .route("/space/{id}", get(get_space).put(update_space))
}

#[utoipa::path(
    get,
    path = "/spaces",
    responses(
        (status = 200, description = "All spaces with nested equipment and schedules", body = Vec<Space>)
    ),
    tag = "Spaces"
)]
pub async fn list_spaces(State(state): State<AppState>) -> AppResult<Json<Vec<Space>>> {
    let items = space_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/spaces",
    request_body = CreateSpaceRequest,
    responses(
        (status = 200, description = "Space created", body = String)
    ),
    tag = "Spaces"
)]
pub async fn create_space(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpaceRequest>,
) -> AppResult<String> {
    let space = space_service::create(&state, payload).await?;
    tracing::info!(id = space.id, spacetype_id = space.spacetype_id, "space created");
    Ok("Space correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/space/{id}",
    params(("id" = i32, Path, description = "Space ID")),
    responses(
        (status = 200, description = "Zero or one spaces with that id", body = Vec<Space>)
    ),
    tag = "Spaces"
)]
pub async fn get_space(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Space>>> {
    let items = space_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/space/{id}",
    params(("id" = i32, Path, description = "Space ID")),
    request_body = UpdateSpaceRequest,
    responses(
        (status = 200, description = "Space updated", body = String),
        (status = 404, description = "Space not found"),
    ),
    tag = "Spaces"
)]
pub async fn update_space(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSpaceRequest>,
) -> AppResult<String> {
    match space_service::update(&state, id, payload).await? {
        Some(_) => Ok("Space correctly edited".to_string()),
        None => Err(AppError::NotFound("Space")),
    }
}
