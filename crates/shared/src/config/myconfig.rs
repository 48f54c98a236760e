use anyhow::{Context, Result, anyhow};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing env: PORT")?;
        let max_connections_str = std::env::var("DB_MAX_CONNECTIONS").ok();

        Self::from_values(
            database_url,
            &run_migrations_str,
            &port_str,
            max_connections_str.as_deref(),
        )
    }

    pub fn from_values(
        database_url: String,
        run_migrations: &str,
        port: &str,
        max_connections: Option<&str>,
    ) -> Result<Self> {
        let run_migrations = match run_migrations {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{other}'",
                ));
            }
        };

        let port = port
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let max_connections = match max_connections {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            run_migrations,
            port,
            max_connections,
        })
    }
}
