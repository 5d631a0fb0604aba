//! Configuration loading and resolution.
//!
//! Each setting comes from the command line, then the environment, then a
//! built-in default.

use std::time::Duration;

use bio_kegg::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::types::{ErrorCodeStyle, McpError, McpResult};

pub const ENV_BASE_URL: &str = "KEGG_REST_BASE";
pub const ENV_TIMEOUT_SECS: &str = "KEGG_TIMEOUT_SECS";
pub const ENV_ERROR_CODES: &str = "KEGG_MCP_ERROR_CODES";

/// Settings given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub error_codes: Option<String>,
}

/// Resolved server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub error_codes: ErrorCodeStyle,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            error_codes: ErrorCodeStyle::default(),
        }
    }
}

impl ServerConfig {
    /// Resolve against the process environment.
    pub fn resolve(overrides: ConfigOverrides) -> McpResult<Self> {
        Self::from_sources(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary environment lookup.
    pub fn from_sources(
        overrides: ConfigOverrides,
        env: impl Fn(&str) -> Option<String>,
    ) -> McpResult<Self> {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let base_url = overrides
            .base_url
            .or_else(|| env(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => secs,
            None => match env(ENV_TIMEOUT_SECS) {
                Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                    McpError::Config(format!("{ENV_TIMEOUT_SECS}='{raw}': {e}"))
                })?,
                None => DEFAULT_TIMEOUT_SECS,
            },
        };
        if timeout_secs == 0 {
            return Err(McpError::Config(
                "timeout must be at least one second".to_string(),
            ));
        }

        let error_codes = match overrides.error_codes.or_else(|| env(ENV_ERROR_CODES)) {
            Some(raw) => raw.parse()?,
            None => ErrorCodeStyle::default(),
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            error_codes,
        })
    }
}
