use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::equipments::{CreateEquipmentRequest, UpdateEquipmentRequest},
    error::{AppError, AppResult},
    models::Equipment,
    services::equipment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/equipments", get(list_equipments).post(create_equipment))
        .route("/equipment/{id}", get(get_equipment).put(update_equipment))
}

#[utoipa::path(
    get,
    path = "/equipments",
    responses(
        (status = 200, description = "All equipment", body = Vec<Equipment>)
    ),
    tag = "Equipments"
)]
pub async fn list_equipments(State(state): State<AppState>) -> AppResult<Json<Vec<Equipment>>> {
    let items = equipment_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/equipments",
    request_body = CreateEquipmentRequest,
    responses(
        (status = 200, description = "Equipment created", body = String)
    ),
    tag = "Equipments"
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateEquipmentRequest>,
) -> AppResult<String> {
    let equipment = equipment_service::create(&state, payload).await?;
    tracing::info!(id = equipment.id, space_id = equipment.space_id, "equipment created");
    Ok("Equipment correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/equipment/{id}",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Zero or one equipment rows with that id", body = Vec<Equipment>)
    ),
    tag = "Equipments"
)]
pub async fn get_equipment(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Equipment>>> {
    let items = equipment_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/equipment/{id}",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipmentRequest,
    responses(
        (status = 200, description = "Equipment updated", body = String),
        (status = 404, description = "Equipment not found"),
    ),
    tag = "Equipments"
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEquipmentRequest>,
) -> AppResult<String> {
    match equipment_service::update(&state, id, payload).await? {
        Some(_) => Ok("Equipment correctly edited".to_string()),
        None => Err(AppError::NotFound("Equipment")),
    }
}
