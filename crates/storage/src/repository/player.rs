use uuid::Uuid;

use crate::Database;
use crate::dto::player::{PlayerSummary, PlayerWrite};
use crate::error::Result;
use crate::models::Player;
use crate::query::{Direction, RestQuery};

const PLAYER_COLUMNS: &str = "id,name,handicap_index,user_id";

pub struct PlayerRepository<'a> {
    db: &'a Database,
}

impl<'a> PlayerRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Public roster, ordered by name
    pub async fn list_summaries(&self) -> Result<Vec<PlayerSummary>> {
        let query = RestQuery::table("players")
            .select("id,name")
            .order("name", Direction::Asc);

        self.db.fetch(&query).await
    }

    /// Full roster, ordered by name
    pub async fn list(&self) -> Result<Vec<Player>> {
        let query = RestQuery::table("players")
            .select("id,name,handicap_index")
            .order("name", Direction::Asc);

        self.db.fetch(&query).await
    }

    /// Player linked to an identity-service account
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Player>> {
        let query = RestQuery::table("players")
            .select(PLAYER_COLUMNS)
            .eq("user_id", user_id);

        self.db.fetch_optional(&query).await
    }

    pub async fn create(&self, player: &PlayerWrite<'_>) -> Result<Option<Player>> {
        let rows: Vec<Player> = self
            .db
            .insert(&RestQuery::table("players"), player)
            .await?;

        Ok(rows.into_iter().next())
    }

    pub async fn update(&self, player_id: Uuid, player: &PlayerWrite<'_>) -> Result<Option<Player>> {
        let query = RestQuery::table("players").eq("id", player_id);
        let rows: Vec<Player> = self.db.update(&query, player).await?;

        Ok(rows.into_iter().next())
    }
}
