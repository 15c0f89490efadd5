use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, Set};

use crate::{
    dto::spaces::{CreateSpaceRequest, UpdateSpaceRequest},
    entity::{
        equipments, schedules,
        spaces::{ActiveModel, Entity as Spaces, Model},
    },
    error::AppResult,
    models,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Space>> {
    let rows = Spaces::find().all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Space>> {
    let rows = Spaces::find_by_id(id).all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

pub async fn create(state: &AppState, payload: CreateSpaceRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        spacetype_id: Set(payload.spacetype_id),
    };
    let space = active.insert(&state.orm).await?;
    Ok(space)
}

pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateSpaceRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Spaces::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(spacetype_id) = payload.spacetype_id {
        active.spacetype_id = Set(spacetype_id);
    }

    let space = active.update(&state.orm).await?;
    Ok(Some(space))
}

// Shared with spacetype_service for its nested space arrays.
pub(crate) async fn serialize_with_children(
    state: &AppState,
    rows: Vec<Model>,
) -> AppResult<Vec<models::Space>> {
    let equipment_rows = rows.load_many(equipments::Entity, &state.orm).await?;
    let schedule_rows = rows.load_many(schedules::Entity, &state.orm).await?;

    let out = rows
        .into_iter()
        .zip(equipment_rows)
        .zip(schedule_rows)
        .map(|((space, equipment), schedule)| models::Space {
            id: space.id,
            spacetype_id: space.spacetype_id,
            equipment: equipment.into_iter().map(Into::into).collect(),
            schedule: schedule.into_iter().map(Into::into).collect(),
        })
        .collect();
    Ok(out)
}
