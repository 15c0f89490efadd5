use serde::Deserialize;
use utoipa::ToSchema;

/// `is_admin` is intentionally absent: new enterprises are never created as
/// admins, the column defaults to false.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEnterpriseRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub cif: String,
    pub phone: String,
    pub tot_hours: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEnterpriseRequest {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub cif: Option<String>,
    pub phone: Option<String>,
    pub tot_hours: Option<i32>,
}
