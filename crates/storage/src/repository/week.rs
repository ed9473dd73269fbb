use uuid::Uuid;

use crate::Database;
use crate::dto::admin::WinnerPatch;
use crate::error::Result;
use crate::models::Week;
use crate::query::{Direction, Nulls, RestQuery};

const WEEK_COLUMNS: &str =
    "id,week_number,tournament_name,start_date,end_date,logo_url,label,winner_player_name";

pub struct WeekRepository<'a> {
    db: &'a Database,
}

impl<'a> WeekRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Every week, scheduled ones first in number order
    pub async fn list_schedule(&self) -> Result<Vec<Week>> {
        let query = RestQuery::table("weeks")
            .select(WEEK_COLUMNS)
            .order_nulls("week_number", Direction::Asc, Nulls::Last);

        self.db.fetch(&query).await
    }

    /// Weeks that carry a number, i.e. the candidates for the current week
    pub async fn list_scheduled(&self) -> Result<Vec<Week>> {
        let query = RestQuery::table("weeks")
            .select(WEEK_COLUMNS)
            .not_null("week_number")
            .order("week_number", Direction::Asc);

        self.db.fetch(&query).await
    }

    pub async fn find_by_id(&self, week_id: Uuid) -> Result<Option<Week>> {
        let query = RestQuery::table("weeks")
            .select(WEEK_COLUMNS)
            .eq("id", week_id);

        self.db.fetch_optional(&query).await
    }

    pub async fn set_winner(&self, week_id: Uuid, winner: Option<&str>) -> Result<()> {
        let query = RestQuery::table("weeks").eq("id", week_id);
        let patch = WinnerPatch {
            winner_player_name: winner,
        };

        let _: Vec<Week> = self.db.update(&query, &patch).await?;
        Ok(())
    }
}
