use serde::Deserialize;
use utoipa::ToSchema;

/// date and the hour bounds are opaque integers; no ordering or overlap
/// check is performed on them.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateScheduleRequest {
    pub date: i32,
    pub hour_start: i32,
    pub hour_end: i32,
    pub enterprise_id: i32,
    pub space_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateScheduleRequest {
    pub date: Option<i32>,
    pub hour_start: Option<i32>,
    pub hour_end: Option<i32>,
}
