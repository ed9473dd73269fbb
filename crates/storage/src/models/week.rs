use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One scheduled scoring interval of the season.
///
/// `start_date`/`end_date` are calendar days without a time zone. A value the
/// store hands back that is not a `YYYY-MM-DD` day is read as absent, which
/// leaves the week without a date range instead of failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Week {
    pub id: Uuid,
    #[serde(default)]
    pub week_number: Option<i32>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient_day")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_day")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub tournament_name: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub winner_player_name: Option<String>,
}

impl Week {
    /// Label shown to users: the stored label, else `Week {number}`.
    pub fn display_label(&self) -> String {
        match (self.label.as_deref().map(str::trim), self.week_number) {
            (Some(label), _) if !label.is_empty() => label.to_string(),
            (_, Some(number)) => format!("Week {}", number),
            _ => "Week".to_string(),
        }
    }

    /// Both ends of the date range, when the week has a complete one.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }
}

pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn lenient_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_day))
}
