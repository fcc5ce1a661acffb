//! Server configuration.
//!
//! Defaults reproduce a plain local run (`127.0.0.1:8080` and the public demo
//! inference endpoint). A JSON file named by `CHURN_CONFIG`
//! may override any subset of fields, and `CHURN_INFERENCE_URL` overrides the
//! upstream address on top of that.

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "CHURN_CONFIG";
pub const INFERENCE_URL_VAR: &str = "CHURN_INFERENCE_URL";

const DEFAULT_INFERENCE_URL: &str = "https://Maazz-demo-docker-space.hf.space/predict";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid inference url '{url}': {reason}")]
    InferenceUrl { url: String, reason: String },
}

/// Upstream inference service used by the prediction gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub inference_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the app once the server is up.
    pub open_browser: bool,
    pub json_limit_bytes: usize,
    pub gateway: GatewayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
            json_limit_bytes: 64 * 1024,
            gateway: GatewayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `CHURN_CONFIG` and `CHURN_INFERENCE_URL` from the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var_os(CONFIG_PATH_VAR).map(PathBuf::from);
        let inference_url = env::var(INFERENCE_URL_VAR).ok();
        Self::from_sources(path.as_deref(), inference_url)
    }

    pub fn from_sources(
        path: Option<&Path>,
        inference_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                debug!("{} not set, using default configuration", CONFIG_PATH_VAR);
                Self::default()
            }
        };
        if let Some(url) = inference_url {
            config.gateway.inference_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.gateway.inference_url;
        let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InferenceUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InferenceUrl {
                url: url.clone(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        Ok(())
    }
}
