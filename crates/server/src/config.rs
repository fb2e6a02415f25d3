use chrono::TimeDelta;
use log::info;
use models::rules::{CancelPolicy, ReservationPolicy};
use std::{env, fmt::Display, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    key: String,
    value: String,
    reason: String,
}

pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub policy: ReservationPolicy,
    /// `None` disables the completion sweep
    pub sweep_interval: Option<Duration>,
    pub run_migrations: bool,
}

impl Config {
    /// Reads the configuration from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None => {
                let host: String = try_load(&lookup, "DB_HOST", "localhost")?;
                let port: u16 = try_load(&lookup, "DB_PORT", "5432")?;
                let user: String = try_load(&lookup, "DB_USER", "postgres")?;
                let password = lookup("DB_PASSWORD").unwrap_or_default();
                let database: String = try_load(&lookup, "DB_DATABASE", "labfacil")?;

                let credentials = if password.is_empty() {
                    user
                } else {
                    format!("{user}:{password}")
                };
                format!("postgres://{credentials}@{host}:{port}/{database}")
            }
        };

        let lead_time_hours: u32 = try_load(&lookup, "LEAD_TIME_HOURS", "24")?;
        let sweep_secs: u64 = try_load(&lookup, "COMPLETION_SWEEP_SECS", "300")?;

        Ok(Self {
            port: try_load(&lookup, "PORT", "3001")?,
            database_url,
            max_connections: try_load(&lookup, "DB_MAX_CONNECTIONS", "10")?,
            policy: ReservationPolicy {
                lead_time: TimeDelta::hours(i64::from(lead_time_hours)),
                cancel: try_load::<CancelPolicy>(&lookup, "CANCEL_POLICY", "idempotent")?,
            },
            sweep_interval: (sweep_secs > 0).then(|| Duration::from_secs(sweep_secs)),
            run_migrations: try_load(&lookup, "RUN_MIGRATIONS", "false")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.trim().parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError {
            key: key.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 3001);
        assert_eq!(config.database_url, "postgres://postgres@localhost:5432/labfacil");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.policy, ReservationPolicy::default());
        assert_eq!(config.sweep_interval, Some(Duration::from_secs(300)));
        assert!(!config.run_migrations);
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = config(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USER", "lab"),
            ("DB_PASSWORD", "segredo"),
            ("DB_DATABASE", "reservas"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://lab:segredo@db:6543/reservas");
    }

    #[test]
    fn test_database_url_overrides_parts() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_HOST", "db"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_policy_and_sweep() {
        let config = config(&[
            ("LEAD_TIME_HOURS", "48"),
            ("CANCEL_POLICY", "pending-only"),
            ("COMPLETION_SWEEP_SECS", "0"),
            ("RUN_MIGRATIONS", "true"),
        ])
        .unwrap();
        assert_eq!(config.policy.lead_time, TimeDelta::hours(48));
        assert_eq!(config.policy.cancel, CancelPolicy::PendingOnly);
        assert_eq!(config.sweep_interval, None);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = config(&[("PORT", "http")]).err().unwrap();
        assert!(err.to_string().starts_with("invalid PORT value \"http\""));

        assert!(config(&[("CANCEL_POLICY", "never")]).is_err());
        assert!(config(&[("LEAD_TIME_HOURS", "-1")]).is_err());
    }
}
