use anyhow::Context as _;

use crate::domain::types::DEFAULT_MAX_CODE_ATTEMPTS;

/// Groups service configuration loaded from environment variables.
#[derive(Debug)]
pub struct GroupsConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `GROUPS_PORT`.
    pub groups_port: u16,
    /// Join code candidates drawn before giving up (default 10). Env var: `JOIN_CODE_MAX_ATTEMPTS`.
    pub join_code_max_attempts: u32,
}

impl GroupsConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: lookup("DATABASE_URL").context("DATABASE_URL is not set")?,
            groups_port: parse_or(&lookup, "GROUPS_PORT", 3114)?,
            join_code_max_attempts: parse_or(
                &lookup,
                "JOIN_CODE_MAX_ATTEMPTS",
                DEFAULT_MAX_CODE_ATTEMPTS,
            )?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw.parse().with_context(|| format!("invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}
