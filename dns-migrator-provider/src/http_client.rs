//! Shared HTTP plumbing for the source and target clients.
//!
//! Both clients build their own `RequestBuilder` (session header for Dynect,
//! `SigV4` headers for Route 53); this module only sends it, logs it, reads
//! the body back and decodes it (JSON or XML).

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::{sanitize_for_log, truncate_for_log};

/// First backoff step, doubled after every failed attempt.
const BACKOFF_BASE_MS: u64 = 100;
/// Upper bound of the exponential backoff.
const BACKOFF_CAP: Duration = Duration::from_secs(10);
/// Upper bound for a server-provided `Retry-After`.
const RETRY_AFTER_CAP_SECS: u64 = 30;

pub struct HttpUtils;

impl HttpUtils {
    /// Send a request, retrying transient failures up to `max_retries` times.
    ///
    /// Any response other than 429 and 502-504 is handed back as
    /// `(status, body)`; interpreting it is up to the caller. 429, 502-504 and
    /// transport failures become `RateLimited` / `NetworkError` / `Timeout`
    /// and are retried with exponential backoff (or the server's
    /// `Retry-After`, capped at 30 s).
    pub async fn execute_request_with_retry(
        request: RequestBuilder,
        provider: &str,
        method: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ProviderError> {
        let mut attempt = 0;

        loop {
            // 最后一次尝试直接消费 builder
            let retry_copy = if attempt < max_retries {
                let copy = request.try_clone();
                if copy.is_none() {
                    log::warn!("[{provider}] Request body cannot be cloned, sending without retry");
                }
                copy
            } else {
                None
            };
            let Some(current) = retry_copy else {
                return Self::send_once(request, provider, method, url).await;
            };

            match Self::send_once(current, provider, method, url).await {
                Err(e) if e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    attempt += 1;
                    log::warn!(
                        "[{provider}] {method} {url} failed (attempt {attempt}/{}), retrying in {}ms: {e}",
                        max_retries + 1,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                outcome => return outcome,
            }
        }
    }

    async fn send_once(
        request: RequestBuilder,
        provider: &str,
        method: &str,
        url: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider}] {method} {url}");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Timeout {
                    provider: provider.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ProviderError::NetworkError {
                    provider: provider.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;
        log::debug!("[{provider}] {status} {}", sanitize_for_log(&body));

        match status {
            429 => Err(ProviderError::RateLimited {
                provider: provider.to_string(),
                retry_after,
                raw_message: Some(truncate_for_log(&body)),
            }),
            502..=504 => Err(ProviderError::NetworkError {
                provider: provider.to_string(),
                detail: format!("HTTP {status}: {}", truncate_for_log(&body)),
            }),
            _ => Ok((status, body)),
        }
    }

    /// Decode a JSON body, logging the raw text on failure.
    pub fn parse_json<T: DeserializeOwned>(body: &str, provider: &str) -> Result<T, ProviderError> {
        serde_json::from_str(body).map_err(|e| Self::parse_failure(provider, "JSON", &e, body))
    }

    /// Decode an XML body, logging the raw text on failure.
    pub fn parse_xml<T: DeserializeOwned>(body: &str, provider: &str) -> Result<T, ProviderError> {
        quick_xml::de::from_str(body).map_err(|e| Self::parse_failure(provider, "XML", &e, body))
    }

    fn parse_failure(
        provider: &str,
        format: &str,
        error: &dyn std::fmt::Display,
        body: &str,
    ) -> ProviderError {
        log::error!(
            "[{provider}] {format} parse failed: {error}; body: {}",
            truncate_for_log(body)
        );
        ProviderError::ParseError {
            provider: provider.to_string(),
            detail: error.to_string(),
        }
    }
}

/// Delay before the retry following `attempt` (0-based).
fn retry_delay(error: &ProviderError, attempt: u32) -> Duration {
    if let ProviderError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        return Duration::from_secs((*secs).min(RETRY_AFTER_CAP_SECS));
    }

    let factor = 1_u64 << attempt.min(16);
    Duration::from_millis(BACKOFF_BASE_MS.saturating_mul(factor)).min(BACKOFF_CAP)
}
