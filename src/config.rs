use std::fs;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading the YAML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub synth: SynthConfig,
}

/// Which API surface the gateway serves.
///
/// `Dynamic` is the seeded generator API (`/scan`, `/stats`); `Legacy`
/// serves the fixed two-record fixtures (`/api/files`, `/scan`, `/metrics`)
/// that older dashboard builds were written against. The two variants bind
/// `/scan` with different response shapes, so they are mutually exclusive.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    #[default]
    Dynamic,
    Legacy,
}

impl FromStr for ServeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dynamic" => Ok(ServeMode::Dynamic),
            "legacy" => Ok(ServeMode::Legacy),
            other => Err(format!(
                "unknown serve mode '{}' (expected 'dynamic' or 'legacy')",
                other
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub mode: ServeMode,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            mode: ServeMode::Dynamic,
        }
    }
}

/// Knobs for the synthetic record generator.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SynthConfig {
    /// Range of the two nested `dir<N>` path segments.
    pub dir_span: u32,
    /// Size of the synthetic owner pool (`user001`..`user{N}`).
    pub user_count: u32,
    /// Seed applied when the request carries none.
    pub default_seed: String,
    /// System ID applied when the request carries none.
    pub default_system_id: String,
    /// Upper bound on records synthesized for the byte estimate.
    pub sample_cap: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            dir_span: 1000,
            user_count: 120,
            default_seed: "storalogic".to_string(),
            default_system_id: "demo".to_string(),
            sample_cap: 10_000,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
            path: config_path.clone(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path,
            source,
        })
    }
}
