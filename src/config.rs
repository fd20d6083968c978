// src/config.rs

use std::env;
use std::error::Error;

use dotenvy::dotenv;
use url::Url;

/// Number of questions returned per page by `/getPreguntasPaginado`.
pub const QUESTION_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub log_dir: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Apply `./migrations` at startup. The managed store normally owns its schema.
    pub run_migrations: bool,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;
        Url::parse(&database_url).map_err(|e| format!("DATABASE_URL is not a valid URL: {}", e))?;

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("PORT must be a valid port number: {}", e))?,
            Err(_) => 8000,
        };

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .map_err(|e| format!("DATABASE_MAX_CONNECTIONS must be a number: {}", e))?,
            Err(_) => 5,
        };

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| parse_origins(&v))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            rust_log,
            log_dir,
            host,
            port,
            max_connections,
            run_migrations,
            cors_origins,
        })
    }

    /// Host part of the database URL, for logging without credentials.
    pub fn database_host(&self) -> String {
        Url::parse(&self.database_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
