//! Provider factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::{DynectProvider, Route53Provider};
use crate::traits::{SourceProvider, TargetProvider};
use crate::types::{SourceCredentials, TargetCredentials};

/// Creates a [`SourceProvider`] instance from the given credentials.
///
/// The concrete provider type is determined by the [`SourceCredentials`] variant.
/// `max_retries` bounds automatic retries of transient failures (0 disables them).
///
/// # Examples
///
/// ```rust,no_run
/// use dns_migrator_provider::{create_source_provider, SourceCredentials};
///
/// let provider = create_source_provider(
///     SourceCredentials::Dynect {
///         customer: "acme".to_string(),
///         username: "api".to_string(),
///         password: "secret".to_string(),
///     },
///     0,
/// )
/// .unwrap();
/// ```
pub fn create_source_provider(
    credentials: SourceCredentials,
    max_retries: u32,
) -> Result<Arc<dyn SourceProvider>> {
    match credentials {
        SourceCredentials::Dynect {
            customer,
            username,
            password,
        } => Ok(Arc::new(
            DynectProvider::builder(customer, username, password)
                .max_retries(max_retries)
                .build()?,
        )),
    }
}

/// Creates a [`TargetProvider`] instance from the given credentials.
///
/// # Examples
///
/// ```rust,no_run
/// use dns_migrator_provider::{create_target_provider, TargetCredentials};
///
/// let provider = create_target_provider(
///     TargetCredentials::Route53 {
///         access_key_id: "AKID".to_string(),
///         secret_access_key: "secret".to_string(),
///     },
///     0,
/// )
/// .unwrap();
/// ```
pub fn create_target_provider(
    credentials: TargetCredentials,
    max_retries: u32,
) -> Result<Arc<dyn TargetProvider>> {
    match credentials {
        TargetCredentials::Route53 {
            access_key_id,
            secret_access_key,
        } => Ok(Arc::new(
            Route53Provider::builder(access_key_id, secret_access_key)
                .max_retries(max_retries)
                .build()?,
        )),
    }
}
