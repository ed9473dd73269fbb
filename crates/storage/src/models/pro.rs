use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const PRO_NAMES: &[&str] = &[
    "Rory McIlroy",
    "Scottie Scheffler",
    "Jon Rahm",
    "Xander Schauffele",
];

/// A professional golfer players can draft. Identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pro {
    pub id: String,
    pub name: String,
}

impl Pro {
    pub fn field() -> Vec<Pro> {
        PRO_NAMES
            .iter()
            .map(|name| Pro {
                id: name.to_string(),
                name: name.to_string(),
            })
            .collect()
    }
}
