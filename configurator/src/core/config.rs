use shared::error::AppError;
use std::time::Duration;
use thiserror::Error;

/// Log levels accepted by `LOG_LEVEL`
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configurator configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Minimum log level |
/// | LOG_JSON | false | JSON log lines instead of text |
/// | LOG_DIR | (unset) | Directory for rolling log files; console only when unset |
/// | OPTIONS_CACHE_TTL_SECS | 300 | TTL of cached option cascades |
///
/// Unparsable values fall back to their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub options_cache_ttl: Duration,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Log directory must not be empty")]
    EmptyLogDir,
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::config(err.to_string())
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR"),
            options_cache_ttl: Duration::from_secs(
                lookup("OPTIONS_CACHE_TTL_SECS")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(300),
            ),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }
        if self.log_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(ConfigError::EmptyLogDir);
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::collections::HashMap;

    fn make_config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.options_cache_ttl, Duration::from_secs(300));
        assert!(config.is_development());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = make_config(&[
            ("ENVIRONMENT", "production"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_JSON", "true"),
            ("LOG_DIR", "/var/log/configurator"),
            ("OPTIONS_CACHE_TTL_SECS", "60"),
        ]);
        assert!(config.is_production());
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/configurator"));
        assert_eq!(config.options_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = make_config(&[("LOG_JSON", "maybe"), ("OPTIONS_CACHE_TTL_SECS", "-5")]);
        assert!(!config.log_json);
        assert_eq!(config.options_cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_validate() {
        let config = make_config(&[("LOG_LEVEL", "loud")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel("loud".into()))
        );

        let config = make_config(&[("LOG_DIR", "  ")]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyLogDir));

        let app: AppError = ConfigError::EmptyLogDir.into();
        assert_eq!(app.code, ErrorCode::ConfigError);
    }
}
