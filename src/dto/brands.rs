use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBrandRequest {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub enterprise_id: i32,
}

/// Ownership is fixed at creation: enterprise_id is not updatable.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBrandRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
}
