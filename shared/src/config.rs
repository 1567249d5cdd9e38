use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse()
                .context("DATABASE_PORT is not a valid port number")?,
            username: std::env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let auth = AuthConfig {
            token_secret: std::env::var("AUTH_TOKEN_SECRET").context("AUTH_TOKEN_SECRET is not set")?,
            access_token_ttl_minutes: env_var_or("AUTH_ACCESS_TOKEN_TTL_MINUTES", 45)?,
            refresh_token_ttl_days: env_var_or("AUTH_REFRESH_TOKEN_TTL_DAYS", 14)?,
        };
        Ok(Self { database, auth })
    }
}

fn env_var_or(name: &str, default: i64) -> Result<i64> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(v) => v
            .parse()
            .with_context(|| format!("{name} is not a valid number")),
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct AuthConfig {
    pub token_secret: String,
    pub access_token_ttl_minutes: i64,
    pub refresh_token_ttl_days: i64,
}
