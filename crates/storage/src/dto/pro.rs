use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProScoreQuery {
    pub pro_id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProScoreResponse {
    pub ok: bool,
    pub pro_id: Option<String>,
    /// Always null until a score provider is wired in
    pub pro_to_par: Option<i32>,
    pub note: String,
}
