use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::brands::{CreateBrandRequest, UpdateBrandRequest},
    error::{AppError, AppResult},
    models::Brand,
    services::brand_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/brands", get(list_brands).post(create_brand))
        .route("/brand/{id}", get(get_brand).put(update_brand))
}

#[utoipa::path(
    get,
    path = "/brands",
    responses(
        (status = 200, description = "All brands", body = Vec<Brand>)
    ),
    tag = "Brands"
)]
pub async fn list_brands(State(state): State<AppState>) -> AppResult<Json<Vec<Brand>>> {
    let items = brand_service::list(&state).await?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/brands",
    request_body = CreateBrandRequest,
    responses(
        (status = 200, description = "Brand created", body = String)
    ),
    tag = "Brands"
)]
pub async fn create_brand(
    State(state): State<AppState>,
    Json(payload): Json<CreateBrandRequest>,
) -> AppResult<String> {
    let brand = brand_service::create(&state, payload).await?;
    tracing::info!(id = brand.id, enterprise_id = brand.enterprise_id, "brand created");
    Ok("Brand correctly created".to_string())
}

#[utoipa::path(
    get,
    path = "/brand/{id}",
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Zero or one brands with that id", body = Vec<Brand>)
    ),
    tag = "Brands"
)]
pub async fn get_brand(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Brand>>> {
    let items = brand_service::find_by_id(&state, id).await?;
    Ok(Json(items))
}

#[utoipa::path(
    put,
    path = "/brand/{id}",
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = UpdateBrandRequest,
    responses(
        (status = 200, description = "Brand updated", body = String),
        (status = 404, description = "Brand not found"),
    ),
    tag = "Brands"
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBrandRequest>,
) -> AppResult<String> {
    match brand_service::update(&state, id, payload).await? {
        Some(_) => Ok("Brand correctly edited".to_string()),
        None => Err(AppError::NotFound("Brand")),
    }
}
