use anyhow::{Context, Result};
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub supabase_url: String,
    pub anon_key: String,
    pub service_role_key: String,
    pub admin_tokens: String,
    pub season_timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .with_context(|| format!("Cannot load {} env variable", key))
        };

        Ok(Self {
            host: required("HOST")?,
            port: required("PORT")?
                .parse()
                .context("PORT must be a number")?,
            supabase_url: required("SUPABASE_URL")?,
            anon_key: required("SUPABASE_ANON_KEY")?,
            service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            admin_tokens: lookup("ADMIN_TOKEN").unwrap_or_default(),
            season_timezone: match lookup("SEASON_TIMEZONE") {
                Some(name) if !name.trim().is_empty() => name
                    .trim()
                    .parse()
                    .map_err(|e| anyhow::anyhow!("Invalid SEASON_TIMEZONE: {}", e))?,
                _ => Tz::UTC,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> HashMap<String, String> {
        vars(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service"),
        ])
    }

    #[test]
    fn test_defaults() {
        let env = base();
        let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_tokens, "");
        assert_eq!(config.season_timezone, Tz::UTC);
    }

    #[test]
    fn test_timezone_is_parsed() {
        let mut env = base();
        env.insert("SEASON_TIMEZONE".to_string(), "America/New_York".to_string());

        let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();
        assert_eq!(config.season_timezone, chrono_tz::America::New_York);
    }

    #[test]
    fn test_unknown_timezone_fails() {
        let mut env = base();
        env.insert("SEASON_TIMEZONE".to_string(), "Mars/Olympus".to_string());

        assert!(Config::from_lookup(|key| env.get(key).cloned()).is_err());
    }

    #[test]
    fn test_missing_service_key_fails() {
        let mut env = base();
        env.remove("SUPABASE_SERVICE_ROLE_KEY");

        let err = Config::from_lookup(|key| env.get(key).cloned()).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_SERVICE_ROLE_KEY"));
    }

    #[test]
    fn test_bad_port_fails() {
        let mut env = base();
        env.insert("PORT".to_string(), "eighty".to_string());

        assert!(Config::from_lookup(|key| env.get(key).cloned()).is_err());
    }
}
