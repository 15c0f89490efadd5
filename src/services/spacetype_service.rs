use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, LoaderTrait, Set};

use crate::{
    dto::spacetypes::{CreateSpacetypeRequest, UpdateSpacetypeRequest},
    entity::{
        spaces,
        spacetypes::{ActiveModel, Entity as Spacetypes, Model},
    },
    error::AppResult,
    models,
    services::space_service,
    state::AppState,
};

pub async fn list(state: &AppState) -> AppResult<Vec<models::Spacetype>> {
    let rows = Spacetypes::find().all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<Vec<models::Spacetype>> {
    let rows = Spacetypes::find_by_id(id).all(&state.orm).await?;
    serialize_with_children(state, rows).await
}

pub async fn create(state: &AppState, payload: CreateSpacetypeRequest) -> AppResult<Model> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
    };
    let spacetype = active.insert(&state.orm).await?;
    Ok(spacetype)
}

pub async fn update(
    state: &AppState,
    id: i32,
    payload: UpdateSpacetypeRequest,
) -> AppResult<Option<Model>> {
    let Some(existing) = Spacetypes::find_by_id(id).one(&state.orm).await? else {
        return Ok(None);
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }

    let spacetype = active.update(&state.orm).await?;
    Ok(Some(spacetype))
}

// Spacetypes serialize two levels deep: each space carries its own
// equipment and schedule arrays.
async fn serialize_with_children(
    state: &AppState,
    rows: Vec<Model>,
) -> AppResult<Vec<models::Spacetype>> {
    let space_rows = rows.load_many(spaces::Entity, &state.orm).await?;

    let mut out = Vec::with_capacity(rows.len());
    for (spacetype, space_group) in rows.into_iter().zip(space_rows) {
        let space = space_service::serialize_with_children(state, space_group).await?;
        out.push(models::Spacetype {
            id: spacetype.id,
            name: spacetype.name,
            description: spacetype.description,
            space,
        });
    }
    Ok(out)
}
