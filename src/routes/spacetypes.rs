use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::spacetypes::{CreateSpacetypeRequest, UpdateSpacetypeRequest},
    error::{AppError, AppResult},
    models::Spacetype,
    services::spacetype_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/spacetypes", get(list_spacetypes).post(create_spacetype))
        .route("/spacetype/{id}", get(get_spacetype).put(update_spacetype))
}

#[utoipa::path(
    get,
    path = "/spacetypes",
    responses(
        (status = 200, description = "All spacetypes with nested spaces", body = Vec<Spacetype>)
    ),
    tag = "Spacetypes"
)]
pub async fn list_spacetypes(State(state): State<AppState>) -> AppResult<Json<Vec<Spacetype>>> {
    let items = spacetype_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/spacetypes",
    request_body = CreateSpacetypeRequest,
    responses(
        (status = 200, description = "Spacetype created", body = String)
    ),
    tag = "Spacetypes"
)]
pub async fn create_spacetype(
    State(state): State<AppState>,
    Json(payload): Json<CreateSpacetypeRequest>,
) -> AppResult<String> {
    let spacetype = spacetype_service::create(&state, payload).await?;
    tracing::info!(id = spacetype.id, "spacetype created");
    Ok("Spacetype correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/spacetype/{id}",
    params(("id" = i32, Path, description = "Spacetype ID")),
    responses(
        (status = 200, description = "Zero or one spacetypes with that id", body = Vec<Spacetype>)
    ),
    tag = "Spacetypes"
)]
pub async fn get_spacetype(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Spacetype>>> {
    let items = spacetype_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/spacetype/{id}",
    params(("id" = i32, Path, description = "Spacetype ID")),
    request_body = UpdateSpacetypeRequest,
    responses(
        (status = 200, description = "Spacetype updated", body = String),
        (status = 404, description = "Spacetype not found"),
    ),
    tag = "Spacetypes"
)]
pub async fn update_spacetype(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSpacetypeRequest>,
) -> AppResult<String> {
    match spacetype_service::update(&state, id, payload).await? {
        Some(_) => Ok("Spacetype correctly edited".to_string()),
        None => Err(AppError::NotFound("Spacetype")),
    }
}
