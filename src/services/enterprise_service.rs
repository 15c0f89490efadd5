use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, Set};

use crate::{
    dto::enterprises::{CreateEnterpriseRequest, UpdateEnterpriseRequest},
    entity::{
        brands,
        enterprises::{ActiveModel, Entity as Enterprises, Model},
        schedules,
    },
    error::AppResult,
    models,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Enterprise>> {
    let rows = Enterprises::find().all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

/// Filter by id; an unknown id yields an empty list, not an error.
pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Enterprise>> {
    let rows = Enterprises::find_by_id(id).all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

pub async fn create(state: &AppState, payload: CreateEnterpriseRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        last_name: Set(payload.last_name),
        email: Set(payload.email),
        password: Set(payload.password),
        cif: Set(payload.cif),
        phone: Set(payload.phone),
        tot_hours: Set(payload.tot_hours),
        // column default: never created as admin
        is_admin: NotSet,
    };
    let enterprise = active.insert(&state.orm).await?;
    Ok(enterprise)
}

/// Partial merge; `None` means no row with that id exists.
pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateEnterpriseRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Enterprises::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(password) = payload.password {
        active.password = Set(password);
    }
    if let Some(cif) = payload.cif {
        active.cif = Set(cif);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(tot_hours) = payload.tot_hours {
        active.tot_hours = Set(tot_hours);
    }

    let enterprise = active.update(&state.orm).await?;
    Ok(Some(enterprise))
}

async fn serialize_with_children(
    state: &AppState,
    rows: Vec<Model>,
) -> AppResult<Vec<models::Enterprise>> {
    let brand_rows = rows.load_many(brands::Entity, &state.orm).await?;
    let schedule_rows = rows.load_many(schedules::Entity, &state.orm).await?;

    let out = rows
        .into_iter()
        .zip(brand_rows)
        .zip(schedule_rows)
        .map(|((enterprise, brand), schedule)| models::Enterprise {
            id: enterprise.id,
            name: enterprise.name,
            last_name: enterprise.last_name,
            email: enterprise.email,
            password: enterprise.password,
            cif: enterprise.cif,
            phone: enterprise.phone,
            tot_hours: enterprise.tot_hours,
            is_admin: enterprise.is_admin,
            brand: brand.into_iter().map(Into::into).collect(),
            schedule: schedule.into_iter().map(Into::into).collect(),
        })
        .collect();
    Ok(out)
}
