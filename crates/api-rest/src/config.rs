//! REST server configuration.
//!
//! Values are parsed from optional raw strings so callers decide where they come from (the
//! binary reads them from the environment once at startup).

use diagnosis_core::{ConfigError, ConfigResult};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8080";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestConfig {
    addr: SocketAddr,
    request_timeout: Duration,
}

impl RestConfig {
    pub fn new(addr: SocketAddr, request_timeout: Duration) -> ConfigResult<Self> {
        if request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "request_timeout",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(Self {
            addr,
            request_timeout,
        })
    }

    /// Builds the configuration from raw `DIAGNOSIS_REST_ADDR` and
    /// `DIAGNOSIS_REQUEST_TIMEOUT_SECS` values. Missing or blank values use the defaults.
    pub fn from_env_values(
        addr: Option<String>,
        request_timeout_secs: Option<String>,
    ) -> ConfigResult<Self> {
        let addr = non_blank(addr).unwrap_or_else(|| DEFAULT_REST_ADDR.into());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                name: "DIAGNOSIS_REST_ADDR",
                reason: e.to_string(),
            })?;

        let secs = match non_blank(request_timeout_secs) {
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
            Some(raw) => raw.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: "DIAGNOSIS_REQUEST_TIMEOUT_SECS",
                reason: e.to_string(),
            })?,
        };

        Self::new(addr, Duration::from_secs(secs))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
