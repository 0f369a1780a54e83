use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::ScoringPoints;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
    #[serde(default)]
    pub sanitize: SanitizeSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: PointsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PointsConfig {
    #[serde(default = "default_perfect_sector")]
    pub perfect_sector: u8,
    #[serde(default = "default_wants_our_sector")]
    pub wants_our_sector: u8,
    #[serde(default = "default_operates_in_desired")]
    pub operates_in_desired: u8,
    #[serde(default = "default_same_region")]
    pub same_region: u8,
    #[serde(default = "default_national_reach")]
    pub national_reach: u8,
    #[serde(default = "default_complementary_type")]
    pub complementary_type: u8,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            perfect_sector: default_perfect_sector(),
            wants_our_sector: default_wants_our_sector(),
            operates_in_desired: default_operates_in_desired(),
            same_region: default_same_region(),
            national_reach: default_national_reach(),
            complementary_type: default_complementary_type(),
        }
    }
}

fn default_perfect_sector() -> u8 { 90 }
fn default_wants_our_sector() -> u8 { 70 }
fn default_operates_in_desired() -> u8 { 60 }
fn default_same_region() -> u8 { 20 }
fn default_national_reach() -> u8 { 15 }
fn default_complementary_type() -> u8 { 10 }

impl From<PointsConfig> for ScoringPoints {
    fn from(config: PointsConfig) -> Self {
        Self {
            perfect_sector: config.perfect_sector,
            wants_our_sector: config.wants_our_sector,
            operates_in_desired: config.operates_in_desired,
            same_region: config.same_region,
            national_reach: config.national_reach,
            complementary_type: config.complementary_type,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "default_window_ms")]
    pub window_ms: i64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_ms: default_window_ms(),
        }
    }
}

fn default_max_attempts() -> usize { 5 }
fn default_window_ms() -> i64 { 15 * 60 * 1000 }

#[derive(Debug, Clone, Deserialize)]
pub struct SanitizeSettings {
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

impl Default for SanitizeSettings {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
        }
    }
}

fn default_max_text_length() -> usize { 1000 }

/// A setting value outside the range the algorithms can work with
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("rate_limit.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("rate_limit.window_ms must be at least 1")]
    ZeroWindow,

    #[error("scoring.points.{0} exceeds the 100-point scale")]
    PointsOutOfRange(&'static str),

    #[error("sanitize.max_text_length must be at least 1")]
    ZeroTextLength,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CPB_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CPB_)
            // e.g., CPB_RATE_LIMIT__MAX_ATTEMPTS -> rate_limit.max_attempts
            .add_source(
                Environment::with_prefix("CPB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CPB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Reject values the scoring and limiting code cannot operate on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.rate_limit.max_attempts == 0 {
            return Err(SettingsError::ZeroAttempts);
        }
        if self.rate_limit.window_ms <= 0 {
            return Err(SettingsError::ZeroWindow);
        }
        if self.sanitize.max_text_length == 0 {
            return Err(SettingsError::ZeroTextLength);
        }

        let points = &self.scoring.points;
        for (name, value) in [
            ("perfect_sector", points.perfect_sector),
            ("wants_our_sector", points.wants_our_sector),
            ("operates_in_desired", points.operates_in_desired),
            ("same_region", points.same_region),
            ("national_reach", points.national_reach),
            ("complementary_type", points.complementary_type),
        ] {
            if value > 100 {
                return Err(SettingsError::PointsOutOfRange(name));
            }
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            rate_limit: RateLimitSettings::default(),
            sanitize: SanitizeSettings::default(),
        }
    }
}
