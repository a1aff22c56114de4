//! Router configuration.
//!
//! This module provides [`RouterConfig`], which fixes the target
//! classification sets, the sample-count ceiling and the optional seed for
//! one router, together with a builder and TOML loading.

use std::collections::BTreeSet;
#[cfg(feature = "serde")]
use std::path::Path;

use thiserror::Error;

use crate::targets::{DEFAULT_BERNOULLI_TARGETS, DEFAULT_BOUNDED_TARGETS};

/// Maximum number of samples per generation request.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Environment variable overriding the configured seed.
pub const SEED_ENV_VAR: &str = "FAIR_INPUT_SEED";

/// Configuration error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Immutable router configuration.
///
/// Use [`RouterConfig::builder`] to construct instances, or
/// [`RouterConfig::default`] for the standard FAIR classification.
///
/// # Examples
///
/// ```rust
/// use fair_input::router::RouterConfig;
///
/// let config = RouterConfig::builder()
///     .seed(42)
///     .bounded_target("Resistance Strength")
///     .build()
///     .expect("valid configuration");
///
/// assert!(config.is_bounded("Vulnerability"));
/// assert!(config.is_bounded("Resistance Strength"));
/// assert!(config.is_bernoulli_only("Vulnerability"));
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// Targets whose values are confined to [0, 1].
    bounded_targets: BTreeSet<String>,
    /// Targets always sampled from Bernoulli.
    bernoulli_targets: BTreeSet<String>,
    /// Upper bound on samples per request.
    max_samples: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            bounded_targets: DEFAULT_BOUNDED_TARGETS.iter().map(|t| t.to_string()).collect(),
            bernoulli_targets: DEFAULT_BERNOULLI_TARGETS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            max_samples: MAX_SAMPLES,
            seed: None,
        }
    }
}

impl RouterConfig {
    /// Creates a new configuration builder seeded with the defaults.
    #[inline]
    pub fn builder() -> RouterConfigBuilder {
        RouterConfigBuilder::default()
    }

    /// Returns `true` if `target` is confined to [0, 1].
    #[inline]
    pub fn is_bounded(&self, target: &str) -> bool {
        self.bounded_targets.contains(target)
    }

    /// Returns `true` if `target` is always sampled from Bernoulli.
    #[inline]
    pub fn is_bernoulli_only(&self, target: &str) -> bool {
        self.bernoulli_targets.contains(target)
    }

    /// Returns the bounded target set.
    #[inline]
    pub fn bounded_targets(&self) -> &BTreeSet<String> {
        &self.bounded_targets
    }

    /// Returns the bernoulli-only target set.
    #[inline]
    pub fn bernoulli_targets(&self) -> &BTreeSet<String> {
        &self.bernoulli_targets
    }

    /// Returns the maximum samples per request.
    #[inline]
    pub fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` listing every problem found:
    /// - `max_samples` is 0
    /// - a target name is blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.max_samples == 0 {
            errors.push("max_samples must be greater than 0".to_string());
        }

        let blank = self
            .bounded_targets
            .iter()
            .chain(self.bernoulli_targets.iter())
            .any(|t| t.trim().is_empty());
        if blank {
            errors.push("target names cannot be blank".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Applies the `FAIR_INPUT_SEED` environment override.
    ///
    /// Unparseable values are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var(SEED_ENV_VAR) {
            if let Ok(seed) = seed.trim().parse() {
                self.seed = Some(seed);
            }
        }
        self
    }

    /// Parses and validates a TOML configuration.
    ///
    /// Omitted fields take their default values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fair_input::router::RouterConfig;
    ///
    /// let config = RouterConfig::from_toml_str(
    ///     r#"
    ///     seed = 7
    ///     bernoulli_targets = []
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.seed(), Some(7));
    /// assert!(!config.is_bernoulli_only("Vulnerability"));
    /// assert!(config.is_bounded("Vulnerability"));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    #[cfg(feature = "serde")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }
}

/// Builder for [`RouterConfig`].
///
/// Starts from the default FAIR classification; targets are added to it.
/// Call [`clear_targets`](Self::clear_targets) to start from empty sets.
#[derive(Clone, Debug, Default)]
pub struct RouterConfigBuilder {
    config: RouterConfig,
}

impl RouterConfigBuilder {
    /// Removes every bounded and bernoulli-only target.
    pub fn clear_targets(mut self) -> Self {
        self.config.bounded_targets.clear();
        self.config.bernoulli_targets.clear();
        self
    }

    /// Marks `target` as confined to [0, 1].
    pub fn bounded_target(mut self, target: impl Into<String>) -> Self {
        self.config.bounded_targets.insert(target.into());
        self
    }

    /// Marks `target` as always sampled from Bernoulli.
    pub fn bernoulli_target(mut self, target: impl Into<String>) -> Self {
        self.config.bernoulli_targets.insert(target.into());
        self
    }

    /// Sets the maximum samples per request.
    #[inline]
    pub fn max_samples(mut self, max_samples: usize) -> Self {
        self.config.max_samples = max_samples;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<RouterConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
