//! Provider configuration
//!
//! Values come from the provider block first and fall back to `EC_*`
//! environment variables.

use std::fmt;
use tfplug::types::{AttributePath, Diagnostic, Dynamic, DynamicValue};
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.elastic-cloud.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 40;

const ENV_ENDPOINT: &str = "EC_ENDPOINT";
const ENV_API_KEY: &str = "EC_API_KEY";
const ENV_INSECURE: &str = "EC_INSECURE";
const ENV_TIMEOUT: &str = "EC_TIMEOUT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("apikey is required (set in provider config or EC_API_KEY env var)")]
    MissingApiKey,

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        let attribute = match self {
            ConfigError::MissingApiKey => "apikey",
            ConfigError::InvalidEndpoint { .. } => "endpoint",
            ConfigError::InvalidValue { name, .. } => name.as_str(),
        };
        Diagnostic::error("Invalid provider configuration", self.to_string())
            .with_attribute(AttributePath::new(attribute))
    }
}

#[derive(Clone, PartialEq)]
pub struct ProviderConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub insecure: bool,
    pub timeout_seconds: u64,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("insecure", &self.insecure)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve configuration from the provider block, falling back to the environment
    pub fn resolve(config: &DynamicValue) -> Result<Self, ConfigError> {
        let endpoint = config_string(config, "endpoint")?
            .or_else(|| non_empty_env(ENV_ENDPOINT))
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let endpoint = parse_endpoint(&endpoint)?;

        let api_key = config_string(config, "apikey")?
            .or_else(|| non_empty_env(ENV_API_KEY))
            .ok_or(ConfigError::MissingApiKey)?;

        let insecure = match config.lookup(&AttributePath::new("insecure")) {
            Some(Dynamic::Bool(b)) => *b,
            Some(other) => return Err(wrong_type("insecure", "bool", other)),
            None => match non_empty_env(ENV_INSECURE) {
                Some(raw) => raw.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                    name: ENV_INSECURE.to_string(),
                    reason: e.to_string(),
                })?,
                None => false,
            },
        };

        let timeout_seconds = match config.lookup(&AttributePath::new("timeout")) {
            Some(Dynamic::Number(n)) if *n >= 1.0 && n.fract() == 0.0 => *n as u64,
            Some(Dynamic::Number(n)) => {
                return Err(ConfigError::InvalidValue {
                    name: "timeout".to_string(),
                    reason: format!("expected a positive number of seconds, got {}", n),
                })
            }
            Some(other) => return Err(wrong_type("timeout", "number", other)),
            None => match non_empty_env(ENV_TIMEOUT) {
                Some(raw) => parse_timeout(&raw)?,
                None => DEFAULT_TIMEOUT_SECONDS,
            },
        };

        tracing::debug!(
            endpoint = %endpoint,
            insecure,
            timeout_seconds,
            "resolved provider configuration"
        );

        Ok(Self {
            endpoint,
            api_key,
            insecure,
            timeout_seconds,
        })
    }
}

fn config_string(config: &DynamicValue, name: &str) -> Result<Option<String>, ConfigError> {
    match config.lookup(&AttributePath::new(name)) {
        Some(Dynamic::String(s)) if !s.is_empty() => Ok(Some(s.clone())),
        Some(Dynamic::String(_)) | None => Ok(None),
        Some(other) => Err(wrong_type(name, "string", other)),
    }
}

fn wrong_type(name: &str, expected: &str, actual: &Dynamic) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: format!("expected {}, got {}", expected, actual.type_name()),
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: format!("unsupported scheme '{}'", scheme),
        }),
    }
}

/// Accepts `40` or `40s`
fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    let digits = raw.trim().trim_end_matches('s');
    match digits.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue {
            name: ENV_TIMEOUT.to_string(),
            reason: format!("expected a positive number of seconds, got '{}'", raw),
        }),
    }
}
