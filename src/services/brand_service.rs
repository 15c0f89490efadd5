use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::{
    dto::brands::{CreateBrandRequest, UpdateBrandRequest},
    entity::brands::{ActiveModel, Entity as Brands, Model},
    error::AppResult,
    models,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Brand>> {
    let rows = Brands::find().all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Brand>> {
    let rows = Brands::find_by_id(id).all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn create(state: &AppState, payload: CreateBrandRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        logo: Set(payload.logo),
        enterprise_id: Set(payload.enterprise_id),
    };
    let brand = active.insert(&state.orm).await?;
    Ok(brand)
}

pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateBrandRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Brands::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(logo) = payload.logo {
        active.logo = Set(logo);
    }

    let brand = active.update(&state.orm).await?;
    Ok(Some(brand))
}
