use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipmentRequest {
    pub quantity: i32,
    pub name: String,
    pub description: String,
    pub space_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipmentRequest {
    pub quantity: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
}
