//! Dynect 错误映射
//!
//! 参考: <https://help.dyn.com/understanding-works-api/>
//!
//! Dynect 在 `msgs[].ERR_CD` 中返回错误类别，具体原因在 `INFO` 中，
//! 格式为 `<source>: <detail>`（如 `login: Credentials you entered did not match`）。

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DynectProvider;

/// 登录失败 / 会话失效的 `INFO` 前缀
const CREDENTIAL_HINTS: [&str; 3] = ["login:", "token:", "credentials"];

fn looks_like_credential_failure(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    CREDENTIAL_HINTS.iter().any(|hint| lower.contains(hint))
}

impl ProviderErrorMapper for DynectProvider {
    fn provider_name(&self) -> &'static str {
        "dynect"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        // 登录失败也以 INVALID_DATA 返回，先按 INFO 判断
        if matches!(raw.code.as_deref(), Some("INVALID_DATA" | "LOGIN_FAILED"))
            && looks_like_credential_failure(&raw.message)
        {
            return ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            };
        }

        match raw.code.as_deref() {
            Some("LOGIN_FAILED" | "BAD_TOKEN") => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("NOT_FOUND") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone_or_unknown(),
                raw_message: Some(raw.message),
            },

            Some("TARGET_EXISTS") => ProviderError::ZoneExists {
                provider: self.provider_name().to_string(),
                zone: context.zone_or_unknown(),
                raw_message: Some(raw.message),
            },

            Some("PERMISSION_DENIED") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // 后端维护 / 暂不可用
            Some("SERVICE_UNAVAILABLE") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            Some("INVALID_DATA" | "MISSING_DATA" | "INVALID_REQUEST") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: raw
                        .message
                        .split_once(':')
                        .map_or_else(|| "request".to_string(), |(src, _)| src.trim().to_string()),
                    detail: raw.message,
                }
            }

            // ILLEGAL_OPERATION / OPERATION_FAILED / UNKNOWN_ERROR 等
            _ => self.unknown_error(raw),
        }
    }
}
