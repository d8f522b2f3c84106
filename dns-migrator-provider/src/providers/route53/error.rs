//! Route 53 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
//! 以及 `CreateHostedZone` / `ChangeResourceRecordSets` 的接口错误列表。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::Route53Provider;

impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        "route53"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "InvalidClientTokenId"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken"
                | "ExpiredToken"
                | "UnrecognizedClientException",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDenied" | "AccessDeniedException" | "NotAuthorizedException") => {
                ProviderError::PermissionDenied {
                    provider: self.provider_name().to_string(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ 频率限制 ============
            Some("Throttling" | "ThrottlingException" | "PriorRequestNotComplete") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 配额 ============
            Some("TooManyHostedZones" | "LimitsExceeded") => ProviderError::QuotaExceeded {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ Zone 已存在 ============
            Some("HostedZoneAlreadyExists" | "ConflictingDomainExists") => {
                ProviderError::ZoneExists {
                    provider: self.provider_name().to_string(),
                    zone: context.zone_or_unknown(),
                    raw_message: Some(raw.message),
                }
            }

            // ============ Zone 不存在 ============
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone_or_unknown(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidDomainName") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "Name".to_string(),
                detail: raw.message,
            },
            Some("InvalidChangeBatch") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "ChangeBatch".to_string(),
                detail: raw.message,
            },
            Some("InvalidInput" | "InvalidArgument" | "ValidationError") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "request".to_string(),
                    detail: raw.message,
                }
            }

            // ============ 服务端 ============
            Some("ServiceUnavailable" | "InternalFailure") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            // ============ 其他错误 fallback ============
            _ => self.unknown_error(raw),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn provider() -> Route53Provider {
        Route53Provider::new(String::new(), String::new()).unwrap()
    }

    fn ctx() -> ErrorContext {
        ErrorContext::zone("example.com")
    }

    // ---- Auth errors ----

    #[test]
    fn invalid_client_token() {
        let err = provider().map_error(
            RawApiError::with_code(
                "InvalidClientTokenId",
                "The security token included in the request is invalid.",
            ),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn signature_mismatch() {
        let err = provider().map_error(
            RawApiError::with_code("SignatureDoesNotMatch", "signature mismatch"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::InvalidCredentials { .. }));
    }

    #[test]
    fn access_denied() {
        let err = provider().map_error(
            RawApiError::with_code("AccessDenied", "User is not authorized"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::PermissionDenied { .. }));
    }

    // ---- Rate / quota ----

    #[test]
    fn throttling_is_rate_limited() {
        let err = provider().map_error(RawApiError::with_code("Throttling", "Rate exceeded"), ctx());
        assert!(matches!(err, ProviderError::RateLimited { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn prior_request_not_complete() {
        let err = provider().map_error(
            RawApiError::with_code("PriorRequestNotComplete", "still processing"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::RateLimited { .. }));
    }

    #[test]
    fn too_many_hosted_zones() {
        let err = provider().map_error(
            RawApiError::with_code("TooManyHostedZones", "limit reached"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::QuotaExceeded { .. }));
    }

    // ---- Zone errors ----

    #[test]
    fn hosted_zone_already_exists() {
        let err = provider().map_error(
            RawApiError::with_code("HostedZoneAlreadyExists", "caller reference reused"),
            ctx(),
        );
        assert!(
            matches!(&err, ProviderError::ZoneExists { zone, .. } if zone == "example.com"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn no_such_hosted_zone() {
        let err = provider().map_error(
            RawApiError::with_code("NoSuchHostedZone", "No hosted zone found with ID: Z123"),
            ErrorContext::zone("Z123"),
        );
        assert!(
            matches!(&err, ProviderError::ZoneNotFound { zone, .. } if zone == "Z123"),
            "unexpected error: {err:?}"
        );
    }

    // ---- Parameter errors ----

    #[test]
    fn invalid_change_batch() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidChangeBatch", "already exists"),
            ctx(),
        );
        assert!(
            matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "ChangeBatch"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn invalid_domain_name() {
        let err = provider().map_error(
            RawApiError::with_code("InvalidDomainName", "bad name"),
            ctx(),
        );
        assert!(
            matches!(&err, ProviderError::InvalidParameter { param, .. } if param == "Name"),
            "unexpected error: {err:?}"
        );
    }

    // ---- Fallback ----

    #[test]
    fn unknown_code() {
        let err = provider().map_error(
            RawApiError::with_code("DelegationSetNotAvailable", "no delegation set"),
            ctx(),
        );
        assert!(matches!(err, ProviderError::Unknown { .. }));
    }
}
