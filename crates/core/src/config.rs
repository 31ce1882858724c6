//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the repository and
//! the service facade. Nothing in the core reads environment variables while handling a
//! request; the `*_from_env_value` helpers take the raw value so the binary owns `std::env`.

use crate::constants::DEFAULT_UPDATE_ATTEMPTS;
use crate::error::{ConfigError, ConfigResult};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    seed_fixtures: bool,
    update_attempts: usize,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `update_attempts` is zero.
    pub fn new(seed_fixtures: bool, update_attempts: usize) -> ConfigResult<Self> {
        if update_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                name: "update_attempts",
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            seed_fixtures,
            update_attempts,
        })
    }

    /// Whether a new in-memory store starts with the fixture patient.
    pub fn seed_fixtures(&self) -> bool {
        self.seed_fixtures
    }

    /// How many times the add-diagnosis command retries after a concurrent patient update.
    pub fn update_attempts(&self) -> usize {
        self.update_attempts
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_fixtures: true,
            update_attempts: DEFAULT_UPDATE_ATTEMPTS,
        }
    }
}

/// Parse the fixture seeding flag from an optional string value.
///
/// Missing or blank values mean `true`. Accepts `true/false`, `1/0`, `yes/no` (any case).
pub fn seed_fixtures_from_env_value(value: Option<String>) -> ConfigResult<bool> {
    let value = value
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| !v.is_empty());

    match value.as_deref() {
        None => Ok(true),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(ConfigError::InvalidValue {
            name: "DIAGNOSIS_SEED_FIXTURES",
            reason: format!("expected a boolean, got {other:?}"),
        }),
    }
}

/// Parse the update attempt budget from an optional string value.
///
/// Missing or blank values fall back to [`DEFAULT_UPDATE_ATTEMPTS`].
pub fn update_attempts_from_env_value(value: Option<String>) -> ConfigResult<usize> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(raw) = value else {
        return Ok(DEFAULT_UPDATE_ATTEMPTS);
    };

    match raw.parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            name: "DIAGNOSIS_UPDATE_ATTEMPTS",
            reason: "must be at least 1".into(),
        }),
        Ok(n) => Ok(n),
        Err(e) => Err(ConfigError::InvalidValue {
            name: "DIAGNOSIS_UPDATE_ATTEMPTS",
            reason: e.to_string(),
        }),
    }
}
