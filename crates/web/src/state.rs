use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use storage::Database;

use crate::config::Config;
use crate::identity::IdentityClient;
use crate::middleware::auth::AdminTokens;

/// Wall clock the current week is resolved against.
#[derive(Debug, Clone)]
pub enum SeasonClock {
    /// Local time of the season's time zone
    Zone(Tz),
    #[cfg(test)]
    Fixed(NaiveDateTime),
}

impl SeasonClock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::Zone(tz) => Utc::now().with_timezone(tz).naive_local(),
            #[cfg(test)]
            Self::Fixed(at) => *at,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Anon-key handle used by the public read endpoints
    pub db: Database,
    /// Service-role handle used by writes and admin operations
    pub service_db: Database,
    pub identity: IdentityClient,
    pub admin_tokens: AdminTokens,
    pub clock: SeasonClock,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let db = Database::new(&config.supabase_url, config.anon_key.clone())
            .context("Failed to build data store client")?;
        let service_db = Database::with_client(
            db.http().clone(),
            &config.supabase_url,
            config.service_role_key.clone(),
        );
        let identity = IdentityClient::new(db.http().clone(), &config.supabase_url, &config.anon_key);

        let admin_tokens = AdminTokens::from_comma_separated(&config.admin_tokens);
        if admin_tokens.is_empty() {
            tracing::warn!("ADMIN_TOKEN is not set, admin endpoints will reject every call");
        }

        Ok(Self {
            db,
            service_db,
            identity,
            admin_tokens,
            clock: SeasonClock::Zone(config.season_timezone),
        })
    }
}
