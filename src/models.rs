use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity;

/// Wire representations. Key spelling (`enterpriseID`, `spaceID`,
/// `spacetypeID`) and the nested child arrays are part of the public
/// contract and must not drift from what clients already parse.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Enterprise {
    pub id: i32,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub cif: String,
    pub phone: String,
    pub tot_hours: i32,
    pub is_admin: bool,
    pub brand: Vec<Brand>,
    pub schedule: Vec<Schedule>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo: String,
    #[serde(rename = "enterpriseID")]
    pub enterprise_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Spacetype {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub space: Vec<Space>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Space {
    pub id: i32,
    #[serde(rename = "spacetypeID")]
    pub spacetype_id: i32,
    pub equipment: Vec<Equipment>,
    pub schedule: Vec<Schedule>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Schedule {
    pub id: i32,
    pub date: i32,
    pub hour_start: i32,
    pub hour_end: i32,
    #[serde(rename = "enterpriseID")]
    pub enterprise_id: i32,
    #[serde(rename = "spaceID")]
    pub space_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub quantity: i32,
    pub name: String,
    pub description: String,
    #[serde(rename = "spaceID")]
    pub space_id: i32,
}

impl From<entity::brands::Model> for Brand {
    fn from(model: entity::brands::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            logo: model.logo,
            enterprise_id: model.enterprise_id,
        }
    }
}

impl From<entity::schedules::Model> for Schedule {
    fn from(model: entity::schedules::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            hour_start: model.hour_start,
            hour_end: model.hour_end,
            enterprise_id: model.enterprise_id,
            space_id: model.space_id,
        }
    }
}

impl From<entity::equipments::Model> for Equipment {
    fn from(model: entity::equipments::Model) -> Self {
        Self {
            id: model.id,
            quantity: model.quantity,
            name: model.name,
            description: model.description,
            space_id: model.space_id,
        }
    }
}
