//! Subgraph server configuration

use std::env;

use anyhow::{bail, Context, Result};
use content_shared_config::{CommonConfig, DatabaseConfig, Environment, PaginationConfig};

/// Default port; the gateway expects subgraphs on 4001+
const DEFAULT_PORT: &str = "4001";

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 4001)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,

    /// Serve the GraphQL playground (default: on outside production)
    pub playground_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// In production `DATABASE_URL` must be set explicitly; elsewhere the
    /// local development database is assumed.
    pub fn from_env() -> Result<Self> {
        let environment: Environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string())
            .parse()
            .unwrap_or_default();

        if environment.is_production() {
            Self::validate_database_url()?;
        }

        let common = CommonConfig::from_env().context("Failed to load common config")?;

        let playground_enabled = match env::var("GRAPHQL_PLAYGROUND") {
            Ok(value) => matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"),
            Err(_) => !environment.is_production(),
        };

        Ok(Self {
            common,

            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .context("Invalid PORT value")?,

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),

            playground_enabled,
        })
    }

    fn validate_database_url() -> Result<()> {
        match env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Ok(()),
            _ => bail!(
                "DATABASE_URL environment variable is required in production. \
                 Please set your PostgreSQL connection string."
            ),
        }
    }

    pub fn database(&self) -> &DatabaseConfig {
        &self.common.database
    }

    pub fn pagination(&self) -> PaginationConfig {
        self.common.pagination
    }

    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 6] = [
        "ENVIRONMENT",
        "DATABASE_URL",
        "PORT",
        "CORS_ORIGINS",
        "GRAPHQL_PLAYGROUND",
        "MAX_PAGE_SIZE",
    ];

    fn with_clean_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let mut all: Vec<(&str, Option<&str>)> = VARS.iter().map(|k| (*k, None)).collect();
        for &(key, value) in vars {
            all.retain(|(k, _)| *k != key);
            all.push((key, Some(value)));
        }
        temp_env::with_vars(all, f);
    }

    #[test]
    fn test_development_defaults() {
        with_clean_env(&[], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.port, 4001);
            assert_eq!(config.environment(), Environment::Development);
            assert!(config.playground_enabled);
            assert!(config.cors_allowed_origins.is_none());
            assert_eq!(config.pagination().max_page_size, 100);
        });
    }

    #[test]
    fn test_production_requires_database_url() {
        with_clean_env(&[("ENVIRONMENT", "production")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_production_disables_playground() {
        with_clean_env(
            &[
                ("ENVIRONMENT", "production"),
                ("DATABASE_URL", "postgres://prod:secret@db:5432/content"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.is_production());
                assert!(!config.playground_enabled);
            },
        );
    }

    #[test]
    fn test_cors_origins_are_trimmed() {
        with_clean_env(
            &[("CORS_ORIGINS", " https://a.example , ,https://b.example")],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(
                    config.cors_allowed_origins.unwrap(),
                    vec!["https://a.example", "https://b.example"]
                );
            },
        );
    }

    #[test]
    fn test_invalid_port() {
        with_clean_env(&[("PORT", "not-a-port")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_invalid_max_page_size() {
        with_clean_env(&[("MAX_PAGE_SIZE", "0")], || {
            assert!(Config::from_env().is_err());
        });
    }
}
