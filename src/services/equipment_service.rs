use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::{
    dto::equipments::{CreateEquipmentRequest, UpdateEquipmentRequest},
    entity::equipments::{ActiveModel, Entity as Equipments, Model},
    error::AppResult,
    models,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Equipment>> {
    let rows = Equipments::find().all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Equipment>> {
    let rows = Equipments::find_by_id(id).all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn create(state: &AppState, payload: CreateEquipmentRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        quantity: Set(payload.quantity),
        name: Set(payload.name),
        description: Set(payload.description),
        space_id: Set(payload.space_id),
    };
    let equipment = active.insert(&state.orm).await?;
    Ok(equipment)
}

pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateEquipmentRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Equipments::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }

    let equipment = active.update(&state.orm).await?;
    Ok(Some(equipment))
}
