use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetWeekResponse {
    pub ok: bool,
    pub week_id: Uuid,
    /// Number of entries removed
    pub deleted: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecalcResponse {
    pub ok: bool,
    pub week_id: Uuid,
    /// Number of entries whose total changed
    pub updated: usize,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AwardWeekQuery {
    /// Week to settle; defaults to the current week
    pub week_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AwardWeekResponse {
    pub ok: bool,
    pub week_id: Uuid,
    /// Name of the week's leader, when anyone has a combined score
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnerPatch<'a> {
    pub winner_player_name: Option<&'a str>,
}
