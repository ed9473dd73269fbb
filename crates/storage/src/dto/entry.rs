use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{WeekEntry, WeekParticipant, week_entry::combined_total};

/// Request payload for recording a player's score for a week
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub week_id: Uuid,
    pub player_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "pro_id is required"))]
    pub pro_id: String,
    /// Player's own score relative to par
    pub player_to_par: i32,
    /// Drafted pro's score relative to par, when known
    #[serde(default)]
    pub pro_to_par: Option<i32>,
}

/// Request payload for drafting a pro for the caller
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DraftPickRequest {
    pub week_id: Uuid,
    #[validate(length(min = 1, max = 100, message = "pro_id is required"))]
    pub pro_id: String,
}

/// Request payload for joining or leaving a week
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ParticipateRequest {
    pub week_id: Uuid,
    /// Defaults to `true`
    #[serde(default)]
    pub participate: Option<bool>,
}

impl ParticipateRequest {
    pub fn wants_in(&self) -> bool {
        self.participate.unwrap_or(true)
    }
}

/// Full score row written by a score submission. Null components are sent
/// as null so a resubmission clears a stale pro score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreUpsert {
    pub week_id: Uuid,
    pub player_id: Uuid,
    pub pga_golfer: String,
    pub your_score: i32,
    pub pro_score: Option<i32>,
    pub total: Option<i32>,
}

impl From<SubmitScoreRequest> for ScoreUpsert {
    fn from(req: SubmitScoreRequest) -> Self {
        Self {
            week_id: req.week_id,
            player_id: req.player_id,
            total: combined_total(req.player_to_par, req.pro_to_par),
            pga_golfer: req.pro_id,
            your_score: req.player_to_par,
            pro_score: req.pro_to_par,
        }
    }
}

/// Only the pick columns, so drafting never touches recorded scores.
#[derive(Debug, Clone, Serialize)]
pub struct DraftPickUpsert {
    pub week_id: Uuid,
    pub player_id: Uuid,
    pub pga_golfer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TotalPatch {
    pub total: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EntryResponse {
    pub ok: bool,
    pub entry: Option<WeekEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipateMode {
    Joined,
    Left,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipateResponse {
    pub ok: bool,
    pub mode: ParticipateMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<WeekParticipant>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_computes_total() {
        let req: SubmitScoreRequest = serde_json::from_value(json!({
            "week_id": Uuid::nil(),
            "player_id": Uuid::nil(),
            "pro_id": "Jon Rahm",
            "player_to_par": 4,
            "pro_to_par": -6
        }))
        .unwrap();

        let row = ScoreUpsert::from(req);
        assert_eq!(row.total, Some(-2));
        assert_eq!(row.pga_golfer, "Jon Rahm");
    }

    #[test]
    fn test_submission_without_pro_score_sends_nulls() {
        let req: SubmitScoreRequest = serde_json::from_value(json!({
            "week_id": Uuid::nil(),
            "player_id": Uuid::nil(),
            "pro_id": "Jon Rahm",
            "player_to_par": 4
        }))
        .unwrap();

        let body = serde_json::to_value(ScoreUpsert::from(req)).unwrap();
        assert_eq!(body["pro_score"], serde_json::Value::Null);
        assert_eq!(body["total"], serde_json::Value::Null);
        assert_eq!(body["your_score"], json!(4));
    }

    #[test]
    fn test_fractional_score_is_rejected() {
        let result: Result<SubmitScoreRequest, _> = serde_json::from_value(json!({
            "week_id": Uuid::nil(),
            "player_id": Uuid::nil(),
            "pro_id": "Jon Rahm",
            "player_to_par": 1.5
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_participate_defaults_to_joining() {
        let req: ParticipateRequest =
            serde_json::from_value(json!({ "week_id": Uuid::nil() })).unwrap();
        assert!(req.wants_in());

        let req: ParticipateRequest =
            serde_json::from_value(json!({ "week_id": Uuid::nil(), "participate": false }))
                .unwrap();
        assert!(!req.wants_in());
    }
}
