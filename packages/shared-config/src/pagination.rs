//! Page size bounds for list queries

use crate::{parse_env, ConfigError, ConfigResult};

/// Page size applied when a query does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page a single query may request
pub const MAX_PAGE_SIZE: u32 = 100;

/// Page size defaults and limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl PaginationConfig {
    /// Load pagination bounds from `DEFAULT_PAGE_SIZE` and `MAX_PAGE_SIZE`
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            default_page_size: parse_env("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            max_page_size: parse_env("MAX_PAGE_SIZE", MAX_PAGE_SIZE)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.max_page_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_PAGE_SIZE must be at least 1".to_string(),
            ));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(ConfigError::ValidationError(format!(
                "DEFAULT_PAGE_SIZE must be between 1 and {}",
                self.max_page_size
            )));
        }
        Ok(())
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(vec!["DEFAULT_PAGE_SIZE", "MAX_PAGE_SIZE"], || {
            assert_eq!(PaginationConfig::from_env().unwrap(), PaginationConfig::default());
        });
    }

    #[test]
    fn test_zero_max_rejected() {
        temp_env::with_var("MAX_PAGE_SIZE", Some("0"), || {
            assert!(matches!(
                PaginationConfig::from_env(),
                Err(ConfigError::ValidationError(_))
            ));
        });
    }

    #[test]
    fn test_default_above_max_rejected() {
        temp_env::with_vars(
            vec![("DEFAULT_PAGE_SIZE", Some("50")), ("MAX_PAGE_SIZE", Some("20"))],
            || {
                assert!(PaginationConfig::from_env().is_err());
            },
        );
    }
}
