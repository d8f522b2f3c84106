//! Dyn Managed DNS (`DynECT`) source provider

mod error;
mod http;
mod provider;
mod session;
/// Dynect REST API-specific request/response types.
pub(crate) mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

/// Dynect REST API base URL.
pub(crate) const DYNECT_API_BASE: &str = "https://api.dynect.net/REST";
/// Maximum number of `/Job/` polls for an `incomplete` response.
pub(crate) const JOB_POLL_ATTEMPTS: u32 = 30;
/// Pause between two `/Job/` polls.
pub(crate) const JOB_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Dyn Managed DNS provider implementation.
///
/// Authenticates with customer / user / password and a short-lived session
/// token. Every public operation opens its own session and closes it again.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_migrator_provider::DynectProvider;
///
/// let provider = DynectProvider::builder(
///     "customer".to_string(),
///     "user".to_string(),
///     "password".to_string(),
/// )
/// .max_retries(0)
/// .build()?;
/// # Ok::<(), dns_migrator_provider::ProviderError>(())
/// ```
pub struct DynectProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) customer: String,
    pub(crate) username: String,
    pub(crate) password: String,
    pub(crate) max_retries: u32,
    pub(crate) job_poll_attempts: u32,
    pub(crate) job_poll_interval: Duration,
}

/// Builder for [`DynectProvider`] with configurable retry behavior.
pub struct DynectProviderBuilder {
    customer: String,
    username: String,
    password: String,
    base_url: String,
    max_retries: u32,
    job_poll_attempts: u32,
    job_poll_interval: Duration,
}

impl DynectProviderBuilder {
    fn new(customer: String, username: String, password: String) -> Self {
        Self {
            customer,
            username,
            password,
            base_url: DYNECT_API_BASE.to_string(),
            max_retries: 2,
            job_poll_attempts: JOB_POLL_ATTEMPTS,
            job_poll_interval: JOB_POLL_INTERVAL,
        }
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Override the REST base URL (default: `https://api.dynect.net/REST`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set how often and how many times an `incomplete` job is polled
    /// (default: 30 polls, 1 second apart).
    pub fn job_polling(mut self, attempts: u32, interval: Duration) -> Self {
        self.job_poll_attempts = attempts;
        self.job_poll_interval = interval;
        self
    }

    /// Build the [`DynectProvider`] instance.
    pub fn build(self) -> Result<DynectProvider> {
        Ok(DynectProvider {
            client: create_http_client("dynect")?,
            base_url: self.base_url,
            customer: self.customer,
            username: self.username,
            password: self.password,
            max_retries: self.max_retries,
            job_poll_attempts: self.job_poll_attempts,
            job_poll_interval: self.job_poll_interval,
        })
    }
}

impl DynectProvider {
    /// Creates a new Dynect provider with default settings (2 retries).
    pub fn new(customer: String, username: String, password: String) -> Result<Self> {
        Self::builder(customer, username, password).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(customer: String, username: String, password: String) -> DynectProviderBuilder {
        DynectProviderBuilder::new(customer, username, password)
    }
}
