use axum::Router;

use crate::state::AppState;

pub mod brands;
pub mod doc;
pub mod enterprises;
pub mod equipments;
pub mod health;
pub mod schedules;
pub mod sitemap;
pub mod spaces;
pub mod spacetypes;

// Build the API router without binding state; it is provided at the top level.
// Every resource is root-mounted: plural collection path, singular item path.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(enterprises::router())
        .merge(brands::router())
        .merge(schedules::router())
        .merge(spaces::router())
        .merge(spacetypes::router())
        .merge(equipments::router())
}
