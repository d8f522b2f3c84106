//! AWS Route 53 target provider

mod error;
mod http;
mod provider;
mod sign;
/// Route 53 REST/XML request and response types.
pub(crate) mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;

/// Route 53 global endpoint.
pub(crate) const ROUTE53_ENDPOINT: &str = "https://route53.amazonaws.com";
/// Route 53 API version, also the first path segment.
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";
/// XML namespace of request bodies.
pub(crate) const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
/// Route 53 is a global service signed in `us-east-1`.
pub(crate) const SIGNING_REGION: &str = "us-east-1";
/// `SigV4` service name.
pub(crate) const SIGNING_SERVICE: &str = "route53";

/// AWS Route 53 provider implementation.
///
/// Authenticates with AWS Signature Version 4.
///
/// # Construction
///
/// ```rust,no_run
/// use dns_migrator_provider::Route53Provider;
///
/// let provider = Route53Provider::new(
///     "AKIDEXAMPLE".to_string(),
///     "your-secret-access-key".to_string(),
/// )?;
/// # Ok::<(), dns_migrator_provider::ProviderError>(())
/// ```
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) endpoint: String,
    pub(crate) host: String,
    pub(crate) access_key_id: String,
    pub(crate) secret_access_key: String,
    pub(crate) region: String,
    pub(crate) service: String,
    pub(crate) max_retries: u32,
}

/// Builder for [`Route53Provider`] with configurable retry behavior.
pub struct Route53ProviderBuilder {
    access_key_id: String,
    secret_access_key: String,
    endpoint: String,
    region: String,
    max_retries: u32,
}

impl Route53ProviderBuilder {
    fn new(access_key_id: String, secret_access_key: String) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            endpoint: ROUTE53_ENDPOINT.to_string(),
            region: SIGNING_REGION.to_string(),
            max_retries: 2,
        }
    }

    /// Set the maximum number of automatic retries for transient errors (default: 2).
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Override the API endpoint (default: `https://route53.amazonaws.com`).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the signing region (default: `us-east-1`).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Result<Route53Provider> {
        let host = self
            .endpoint
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string();

        Ok(Route53Provider {
            client: create_http_client("route53")?,
            endpoint: self.endpoint,
            host,
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            region: self.region,
            service: SIGNING_SERVICE.to_string(),
            max_retries: self.max_retries,
        })
    }
}

impl Route53Provider {
    /// Creates a new Route 53 provider with default settings (2 retries).
    pub fn new(access_key_id: String, secret_access_key: String) -> Result<Self> {
        Self::builder(access_key_id, secret_access_key).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(access_key_id: String, secret_access_key: String) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(access_key_id, secret_access_key)
    }
}
