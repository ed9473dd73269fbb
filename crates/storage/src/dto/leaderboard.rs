use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::SeasonStanding;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeaderboardQuery {
    /// Week to show; defaults to the current week
    pub week_id: Option<Uuid>,
}

/// One player's line on a weekly leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    pub player_id: Uuid,
    pub player_name: String,
    #[serde(rename = "playerScore")]
    pub player_score: Option<i32>,
    #[serde(rename = "proScore")]
    pub pro_score: Option<i32>,
    pub combined: Option<i32>,
    pub pga_golfer: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Display label of the week shown
    pub week: Option<String>,
    pub week_id: Option<Uuid>,
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardResponse {
    /// No week to show yet: an empty board rather than an error.
    pub fn empty() -> Self {
        Self {
            week: None,
            week_id: None,
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub rows: Vec<SeasonStanding>,
}
