use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One player's result for one week. Unique on (`week_id`, `player_id`).
///
/// A draft pick creates the row before any score is known, so every score
/// column is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeekEntry {
    pub week_id: Uuid,
    pub player_id: Uuid,
    #[serde(default)]
    pub your_score: Option<i32>,
    #[serde(default)]
    pub pro_score: Option<i32>,
    #[serde(default)]
    pub total: Option<i32>,
    #[serde(default)]
    pub pga_golfer: Option<String>,
}

impl WeekEntry {
    /// The stored total, or the sum of both components when the row has none.
    pub fn combined(&self) -> Option<i32> {
        self.total
            .or_else(|| combined_total(self.your_score?, self.pro_score))
    }
}

/// Own score plus the drafted pro's score; unknown until the pro has one.
pub fn combined_total(your_score: i32, pro_score: Option<i32>) -> Option<i32> {
    your_score.checked_add(pro_score?)
}
