use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSpaceRequest {
    pub spacetype_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateSpaceRequest {
    pub spacetype_id: Option<i32>,
}
