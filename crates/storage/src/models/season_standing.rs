use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of the `season_standings` view.
///
/// Players without any awarded week come back from the view with null
/// points; those read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonStanding {
    pub player_id: Uuid,
    pub player_name: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub points: i64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}
