/*
[INPUT]:  YAML configuration file and GNOSISPAY_* environment variables
[OUTPUT]: Resolved CLI configuration (endpoint, SIWE identity, credentials)
[POS]:    Configuration layer - credential and endpoint setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_APP_URI: &str = "https://gnosispay.com";

/// CLI configuration, read from YAML and overridden by environment
#[derive(Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CliConfig {
    /// API host; the SDK default is used when unset
    #[serde(default)]
    pub base_url: Option<String>,
    /// Application URI embedded in SIWE challenges
    #[serde(default = "default_app_uri")]
    pub app_uri: String,
    #[serde(default)]
    pub chain_id: Option<u64>,
    #[serde(default)]
    pub statement: Option<String>,
    /// Wallet address used to sign in
    #[serde(default)]
    pub address: Option<String>,
    /// Hex-encoded secp256k1 key for `address`
    #[serde(default)]
    pub private_key: Option<String>,
    /// Previously issued session token, reused while live
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            app_uri: default_app_uri(),
            chain_id: None,
            statement: None,
            address: None,
            private_key: None,
            auth_token: None,
        }
    }
}

impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("CliConfig")
            .field("base_url", &self.base_url)
            .field("app_uri", &self.app_uri)
            .field("chain_id", &self.chain_id)
            .field("statement", &self.statement)
            .field("address", &self.address)
            .field("private_key", &redacted(&self.private_key))
            .field("auth_token", &redacted(&self.auth_token))
            .finish()
    }
}

fn default_app_uri() -> String {
    DEFAULT_APP_URI.to_string()
}

/// `<config dir>/gnosispay/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gnosispay").join("config.yaml"))
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist. The default path is optional and
    /// defaults apply when it is absent. Environment variables win over
    /// file values.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `GNOSISPAY_*` overrides from `lookup`; empty values are ignored
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = get("GNOSISPAY_BASE_URL") {
            self.base_url = Some(value);
        }
        if let Some(value) = get("GNOSISPAY_APP_URI") {
            self.app_uri = value;
        }
        if let Some(value) = get("GNOSISPAY_ADDRESS") {
            self.address = Some(value);
        }
        if let Some(value) = get("GNOSISPAY_PRIVATE_KEY") {
            self.private_key = Some(value);
        }
        if let Some(value) = get("GNOSISPAY_AUTH_TOKEN") {
            self.auth_token = Some(value);
        }
        self
    }

    /// Address and key needed to sign in
    pub fn credentials(&self) -> Result<(&str, &str)> {
        let address = self
            .address
            .as_deref()
            .context("wallet address missing (set `address` or GNOSISPAY_ADDRESS)")?;
        let private_key = self
            .private_key
            .as_deref()
            .context("private key missing (set `private_key` or GNOSISPAY_PRIVATE_KEY)")?;
        Ok((address, private_key))
    }
}
