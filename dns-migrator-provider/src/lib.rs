//! # dns-migrator-provider
//!
//! Provider clients for migrating DNS zones from a legacy DNS service to a
//! cloud DNS hosting service.
//!
//! ## Supported Providers
//!
//! | Provider | Role | Auth Method |
//! |----------|------|-------------|
//! | [Dyn Managed DNS](https://help.dyn.com/dns-api-knowledge-base/) | source | Session token |
//! | [AWS Route 53](https://aws.amazon.com/route53/) | target | AWS Signature V4 |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for static builds and containers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_migrator_provider::{
//!     create_source_provider, create_target_provider, SourceCredentials, TargetCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source_provider(
//!         SourceCredentials::Dynect {
//!             customer: "acme".to_string(),
//!             username: "api".to_string(),
//!             password: "secret".to_string(),
//!         },
//!         0,
//!     )?;
//!     let _target = create_target_provider(
//!         TargetCredentials::Route53 {
//!             access_key_id: "AKID".to_string(),
//!             secret_access_key: "secret".to_string(),
//!         },
//!         0,
//!     )?;
//!
//!     for record in source.get_zone_records("example.com").await? {
//!         println!("{} {} {}", record.fqdn, record.record_type, record.rdata);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All provider operations return [`Result<T, ProviderError>`](ProviderError).
//! The error enum provides structured variants for common failure modes:
//!
//! - [`ProviderError::InvalidCredentials`]: authentication failed
//! - [`ProviderError::ZoneExists`]: the target already has the zone
//! - [`ProviderError::ZoneNotFound`]: the zone does not exist
//! - [`ProviderError::RateLimited`]: API rate limit exceeded (retryable)
//! - [`ProviderError::NetworkError`]: network connectivity issue (retryable)
//!
//! Transient errors (`NetworkError`, `Timeout`, `RateLimited`) are retried
//! with exponential backoff when the provider is built with `max_retries > 0`.

mod error;
mod factory;
mod http_client;
mod providers;
#[cfg(test)]
mod test_server;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export factory functions
pub use factory::{create_source_provider, create_target_provider};

// Re-export public traits only (internal traits are not exported)
pub use traits::{SourceProvider, TargetProvider};

// Re-export types
pub use types::{
    Change, ChangeAction, ChangeBatch, ChangeInfo, CreateHostedZoneRequest,
    CredentialValidationError, HostedZoneCreation, ProviderType, RecordData, ResourceRecord,
    ResourceRecordSet, SourceCredentials, SourceRecord, SourceZone, TargetCredentials, TargetType,
};

// Re-export concrete providers
pub use providers::{DynectProvider, DynectProviderBuilder, Route53Provider, Route53ProviderBuilder};
