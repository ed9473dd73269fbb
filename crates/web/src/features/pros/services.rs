use storage::{dto::pro::ProScoreResponse, models::Pro};

pub fn list_pros() -> Vec<Pro> {
    Pro::field()
}

/// Live pro scores are not wired to a provider yet; the answer always
/// carries a null score so clients fall back to manual entry.
pub fn pro_score(pro_id: Option<String>) -> ProScoreResponse {
    ProScoreResponse {
        ok: true,
        pro_id: pro_id.filter(|id| !id.trim().is_empty()),
        pro_to_par: None,
        note: "No live score provider configured".to_string(),
    }
}
