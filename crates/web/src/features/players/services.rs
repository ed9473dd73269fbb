use storage::{
    Database, dto::player::PlayerSummary, error::Result, repository::player::PlayerRepository,
};

/// List every player by name
pub async fn list_players(db: &Database) -> Result<Vec<PlayerSummary>> {
    let repo = PlayerRepository::new(db);
    repo.list_summaries().await
}
