//! Environment-backed configuration.

use std::env;

const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the payment records server.
#[derive(Debug)]
pub struct Config {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// SQLite connection string, e.g. `sqlite://payments.db?mode=rwc`.
    pub database_url: String,
}

impl Config {
    /// Reads `PORT` (optional, defaults to 8080) and `DATABASE_URL`
    /// (required, must be a sqlite URL) from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var("PORT").ok(), env::var("DATABASE_URL").ok())
    }

    fn from_vars(port: Option<String>, database_url: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a TCP port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let database_url = database_url.ok_or_else(|| {
            anyhow::anyhow!("DATABASE_URL is not set; expected a sqlite connection string")
        })?;
        // Only the SQLite adapter exists; fail at startup rather than when
        // the pool first connects.
        if !database_url.starts_with("sqlite:") {
            anyhow::bail!("DATABASE_URL must be a sqlite URL, got {database_url:?}");
        }

        Ok(Self { port, database_url })
    }
}
