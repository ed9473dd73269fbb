use crate::Database;
use crate::error::Result;
use crate::models::SeasonStanding;
use crate::query::{Direction, RestQuery};

pub struct StandingRepository<'a> {
    db: &'a Database,
}

impl<'a> StandingRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<SeasonStanding>> {
        let query = RestQuery::table("season_standings")
            .select("player_id,player_name,points")
            .order("points", Direction::Desc)
            .order("player_name", Direction::Asc);

        self.db.fetch(&query).await
    }
}
