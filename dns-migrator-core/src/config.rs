//! Application configuration model
//!
//! The JSON document has three sections: `source_dns` (connector name plus
//! the source provider's credential fields), `target_dns` (target credential
//! fields) and an optional `settings` block. Reading the file is left to the
//! frontend; this module only parses and validates.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use dns_migrator_provider::{ProviderType, SourceCredentials, TargetCredentials, TargetType};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Key in `source_dns` naming the source connector.
const CONNECTOR_KEY: &str = "connector";

/// Tunables; every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Retries for transient provider failures. `0` disables retrying.
    pub max_retries: u32,
    /// Pause between zones when collecting statistics, in seconds.
    pub statistics_delay_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_retries: 0,
            statistics_delay_secs: 5,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Source provider section (`connector` plus credential fields).
    pub source_dns: HashMap<String, String>,
    /// Target provider section (credential fields).
    pub target_dns: HashMap<String, String>,
    /// Optional tunables.
    #[serde(default)]
    pub settings: Settings,
}

impl AppConfig {
    /// Parse a configuration document.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::ConfigError(e.to_string()))
    }

    /// Connector named in `source_dns`, if any.
    pub fn connector_name(&self) -> Option<&str> {
        self.source_dns.get(CONNECTOR_KEY).map(String::as_str)
    }

    /// Source connector named in `source_dns`.
    pub fn connector(&self) -> CoreResult<ProviderType> {
        let name = self.connector_name().ok_or_else(|| {
            CoreError::ConfigError(format!("source_dns.{CONNECTOR_KEY} is missing"))
        })?;
        ProviderType::from_str(name).map_err(|_| CoreError::UnsupportedConnector(name.to_string()))
    }

    /// Validated source credentials, reading `source_dns` as `provider`'s fields.
    pub fn source_credentials_for(&self, provider: ProviderType) -> CoreResult<SourceCredentials> {
        Ok(SourceCredentials::from_map(provider, &self.source_dns)?)
    }

    /// Validated target credentials.
    pub fn target_credentials(&self) -> CoreResult<TargetCredentials> {
        Ok(TargetCredentials::from_map(
            TargetType::Route53,
            &self.target_dns,
        )?)
    }

    /// Pause between zones when collecting statistics.
    pub fn statistics_delay(&self) -> Duration {
        Duration::from_secs(self.settings.statistics_delay_secs)
    }
}
