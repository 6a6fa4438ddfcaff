use std::env;
use std::fmt;

use crate::evaluation::{CombinationRule, DEFAULT_MINIMUM_RATED};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for hosts embedding the engine.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let minimum_rated = match env::var("SCORING_MINIMUM_RATED") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|value| *value > 0)
                .ok_or(ConfigError::InvalidMinimumRated(raw))?,
            Err(_) => DEFAULT_MINIMUM_RATED,
        };

        let combination = match env::var("SCORING_COMBINATION") {
            Ok(raw) => raw
                .parse::<CombinationRule>()
                .map_err(ConfigError::InvalidCombination)?,
            Err(_) => CombinationRule::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            scoring: ScoringConfig {
                minimum_rated,
                combination,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Gates and blending applied when turning ratings into scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Rated catalog metrics needed before the weighted general score is produced.
    pub minimum_rated: usize,
    pub combination: CombinationRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            minimum_rated: DEFAULT_MINIMUM_RATED,
            combination: CombinationRule::default(),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinimumRated(String),
    InvalidCombination(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinimumRated(value) => write!(
                f,
                "SCORING_MINIMUM_RATED must be a positive integer (got '{}')",
                value
            ),
            ConfigError::InvalidCombination(value) => write!(
                f,
                "SCORING_COMBINATION must be equal_thirds or dashboard_weighted (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
