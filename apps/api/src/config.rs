use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::timeline::dates::DATE_FORMAT;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Industry for records that name none.
    pub default_industry: String,
    /// Job role for resumes that name none.
    pub default_job_role: String,
    /// Pins "now" for open-ended and malformed dates. `None` means today (UTC).
    pub evaluation_date: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_industry: "Finances".to_string(),
            default_job_role: "General".to_string(),
            evaluation_date: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => defaults.port,
        };

        let evaluation_date = lookup("EVALUATION_DATE")
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                    .with_context(|| format!("EVALUATION_DATE '{raw}' must be YYYY-MM-DD"))
            })
            .transpose()?;

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            default_industry: lookup("DEFAULT_INDUSTRY").unwrap_or(defaults.default_industry),
            default_job_role: lookup("DEFAULT_JOB_ROLE").unwrap_or(defaults.default_job_role),
            evaluation_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.default_industry, "Finances");
        assert_eq!(config.default_job_role, "General");
        assert!(config.evaluation_date.is_none());
    }

    #[test]
    fn test_overrides_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9000"),
            ("DEFAULT_INDUSTRY", "Healthcare"),
            ("EVALUATION_DATE", "2024-06-01"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.default_industry, "Healthcare");
        assert_eq!(config.evaluation_date, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn test_invalid_evaluation_date_rejected() {
        let err = Config::from_lookup(lookup_from(&[("EVALUATION_DATE", "today")])).unwrap_err();
        assert!(err.to_string().contains("EVALUATION_DATE"));
    }
}
