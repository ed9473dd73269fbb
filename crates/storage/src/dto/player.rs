use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Player;

/// Public view of a player
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlayerSummary {
    pub id: Uuid,
    pub name: String,
}

/// Request payload for creating or updating the caller's player profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct JoinRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    /// Number or numeric string; an empty form field reads as absent.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub handicap_index: Option<Decimal>,
}

impl JoinRequest {
    pub fn clean_name(&self) -> &str {
        self.name.trim()
    }
}

/// Columns written when a profile is created or updated
#[derive(Debug, Clone, Serialize)]
pub struct PlayerWrite<'a> {
    pub name: &'a str,
    pub handicap_index: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    Created,
    Updated,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct JoinResponse {
    pub ok: bool,
    pub mode: JoinMode,
    pub player: Option<Player>,
}

/// Identity of the signed-in caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub user: AuthUser,
    pub player: Option<Player>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawHandicap {
    Number(Decimal),
    Text(String),
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawHandicap>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawHandicap::Number(value)) => Ok(Some(value)),
        Some(RawHandicap::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawHandicap::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(D::Error::custom),
    }
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Missing name".into());
        return Err(error);
    }

    Ok(())
}
