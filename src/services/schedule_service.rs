use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use crate::{
    dto::schedules::{CreateScheduleRequest, UpdateScheduleRequest},
    entity::schedules::{ActiveModel, Entity as Schedules, Model},
    error::AppResult,
    models,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Schedule>> {
    let rows = Schedules::find().all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Schedule>> {
    let rows = Schedules::find_by_id(id).all(&state.orm).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Overlapping bookings for the same space are accepted; nothing compares
/// the interval against existing rows.
pub async fn create(state: &AppState, payload: CreateScheduleRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        date: Set(payload.date),
        hour_start: Set(payload.hour_start),
        hour_end: Set(payload.hour_end),
        enterprise_id: Set(payload.enterprise_id),
        space_id: Set(payload.space_id),
    };
    let schedule = active.insert(&state.orm).await?;
    Ok(schedule)
}

pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateScheduleRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Schedules::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(date) = payload.date {
        active.date = Set(date);
    }
    if let Some(hour_start) = payload.hour_start {
        active.hour_start = Set(hour_start);
    }
    if let Some(hour_end) = payload.hour_end {
        active.hour_end = Set(hour_end);
    }

    let schedule = active.update(&state.orm).await?;
    Ok(Some(schedule))
}
