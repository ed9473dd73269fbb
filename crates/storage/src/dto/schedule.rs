use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Week;

#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub weeks: Vec<Week>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentWeekResponse {
    pub week: Option<Week>,
}
