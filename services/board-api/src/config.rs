//! Service configuration.
//!
//! Everything is env-driven with local-development defaults. `main` builds a
//! [`Config`] once and passes it down by reference.

use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::db::DbConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP port the API listens on.
    pub app_port: u16,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    pub database: DbConfig,

    pub auth: AuthConfig,
}

/// Token signing settings.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,

    /// Access token lifetime.
    pub access_ttl: Duration,

    /// Refresh token lifetime.
    pub refresh_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let app_port = var("APP_PORT", "3030")
            .parse()
            .context("APP_PORT must be a port number.")?;

        let log_level = var("LOG_LEVEL", "info");

        let db_port = var("DB_PORT", "5432")
            .parse()
            .context("DB_PORT must be a port number.")?;

        let defaults = DbConfig::default();

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .map(|v| v.parse())
            .transpose()
            .context("DB_MAX_CONNECTIONS must be an integer.")?
            .unwrap_or(defaults.max_connections);

        let min_connections = lookup("DB_MIN_CONNECTIONS")
            .map(|v| v.parse())
            .transpose()
            .context("DB_MIN_CONNECTIONS must be an integer.")?
            .unwrap_or(defaults.min_connections);

        let database = DbConfig {
            host: var("DB_HOST", "localhost"),
            port: db_port,
            user: var("DB_USER", "postgres"),
            password: var("DB_PASSWORD", "postgres"),
            name: var("DB_NAME", "project_management"),
            max_connections,
            min_connections: min_connections.min(max_connections),
            ..defaults
        };

        let access_minutes: u64 = var("JWT_EXPIRE_MINUTES", "60")
            .parse()
            .context("JWT_EXPIRE_MINUTES must be an integer (minutes).")?;

        let access_secs = access_minutes
            .checked_mul(60)
            .context("JWT_EXPIRE_MINUTES is out of range.")?;

        let refresh_ttl = parse_duration(&var("JWT_REFRESH_TOKEN", "24h"))
            .context("JWT_REFRESH_TOKEN must look like 24h, 90m or 3600s.")?;

        let auth = AuthConfig {
            jwt_secret: var("JWT_SECRET", "secret"),
            access_ttl: Duration::from_secs(access_secs),
            refresh_ttl,
        };

        Ok(Self {
            app_port,
            log_level,
            database,
            auth,
        })
    }
}

/// Parses `<n>h`, `<n>m` or `<n>s`.
fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    let Some(unit) = s.chars().last() else {
        bail!("empty duration");
    };

    let secs_per_unit = match unit {
        'h' => 3600,
        'm' => 60,
        's' => 1,
        other => bail!("unknown duration unit {other:?}"),
    };

    let n: u64 = s[..s.len() - unit.len_utf8()]
        .parse()
        .with_context(|| format!("invalid duration {s:?}"))?;

    let secs = n
        .checked_mul(secs_per_unit)
        .with_context(|| format!("duration {s:?} is out of range"))?;

    Ok(Duration::from_secs(secs))
}
