use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub validator: ValidatorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let licence_key =
            env::var("APP_VALIDATOR_LICENCE_KEY").unwrap_or_else(|_| "OK".to_string());
        if licence_key.trim().is_empty() {
            return Err(ConfigError::EmptyLicenceKey);
        }

        let accepted_numbers = env::var("APP_VALIDATOR_NUMBERS")
            .map(|raw| parse_number_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            validator: ValidatorConfig {
                licence_key: licence_key.trim().to_string(),
                accepted_numbers,
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Settings for the in-process frequent flyer validator used by the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub licence_key: String,
    /// Numbers the validator accepts; empty means any non-empty number.
    pub accepted_numbers: Vec<String>,
}

fn parse_number_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLicenceKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLicenceKey => {
                write!(f, "APP_VALIDATOR_LICENCE_KEY must not be empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_VALIDATOR_LICENCE_KEY");
        env::remove_var("APP_VALIDATOR_NUMBERS");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.validator.licence_key, "OK");
        assert!(config.validator.accepted_numbers.is_empty());
    }

    #[test]
    fn parses_accepted_numbers_and_environment() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "CI");
        env::set_var("APP_VALIDATOR_NUMBERS", " aa, bb,,cc ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.validator.accepted_numbers, vec!["aa", "bb", "cc"]);
        reset_env();
    }

    #[test]
    fn rejects_blank_licence_key() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_VALIDATOR_LICENCE_KEY", "  ");
        let result = AppConfig::load();
        reset_env();
        assert!(matches!(result, Err(ConfigError::EmptyLicenceKey)));
    }
}
