/**
 * Server Configuration
 *
 * This module loads and validates server configuration from the
 * environment into a typed `AppConfig`, constructed once at startup
 * and passed into the components that need it. Nothing reads the
 * environment after startup.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - token signing secret (required; there is
 *   deliberately no fallback default — a missing secret fails startup)
 * - `CORS_ORIGINS` - comma-separated allowed origins (default: all)
 * - `SERVER_PORT` - listen port (default: 8000)
 */

use sqlx::PgPool;
use thiserror::Error;

/// Default listen port when SERVER_PORT is unset
pub const DEFAULT_PORT: u16 = 8000;

/// Typed server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// HMAC secret for bearer-token signing
    pub jwt_secret: String,
    /// Allowed cross-origin hosts; `["*"]` means all
    pub cors_origins: Vec<String>,
    /// Listen port
    pub port: u16,
}

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset
    #[error("Missing required environment variable: {name}")]
    MissingVar {
        /// Variable name
        name: &'static str,
    },
    /// SERVER_PORT is set but not a valid port number
    #[error("Invalid SERVER_PORT value: {value}")]
    InvalidPort {
        /// The offending value
        value: String,
    },
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(ConfigError::MissingVar { name })
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Fails if `DATABASE_URL` or `JWT_SECRET` is unset or empty, or if
    /// `SERVER_PORT` is set to a non-numeric value. Startup must not
    /// proceed on any of these.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;
        let jwt_secret = require("JWT_SECRET")?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let port = match std::env::var("SERVER_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            cors_origins,
            port,
        })
    }

    /// Whether any origin is allowed
    pub fn allow_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

/// Connect to the database and run migrations
///
/// Called once at startup; the resulting pool is shared process-wide
/// through `AppState`. Unlike configuration loading, transient
/// connection failures here surface directly — there is no retry.
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| sqlx::Error::Migrate(Box::new(e)))?;

    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn set_required_vars() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/printshop_test");
        std::env::set_var("JWT_SECRET", "test-secret");
    }

    fn clear_optional_vars() {
        std::env::remove_var("CORS_ORIGINS");
        std::env::remove_var("SERVER_PORT");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        set_required_vars();
        clear_optional_vars();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
        assert!(config.allow_any_origin());
    }

    #[test]
    #[serial]
    fn test_missing_secret_fails() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/printshop_test");
        std::env::remove_var("JWT_SECRET");
        clear_optional_vars();

        let result = AppConfig::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::MissingVar { name: "JWT_SECRET" })
        ));
    }

    #[test]
    #[serial]
    fn test_empty_secret_fails() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/printshop_test");
        std::env::set_var("JWT_SECRET", "");
        clear_optional_vars();

        assert!(AppConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_cors_origin_list() {
        set_required_vars();
        std::env::set_var(
            "CORS_ORIGINS",
            "https://shop.example.com, https://admin.example.com",
        );
        std::env::remove_var("SERVER_PORT");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(
            config.cors_origins,
            vec![
                "https://shop.example.com".to_string(),
                "https://admin.example.com".to_string(),
            ]
        );
        assert!(!config.allow_any_origin());
    }

    #[test]
    #[serial]
    fn test_invalid_port_fails() {
        set_required_vars();
        clear_optional_vars();
        std::env::set_var("SERVER_PORT", "not-a-port");

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
        std::env::remove_var("SERVER_PORT");
    }
}
