use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{ChangeBatch, ChangeInfo, CreateHostedZoneRequest, HostedZoneCreation, SourceRecord, SourceZone};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Zone 名称或 ID（用于 `ZoneNotFound` / `ZoneExists`）
    pub zone: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: Some(zone.into()),
        }
    }

    pub(crate) fn zone_or_unknown(&self) -> String {
        self.zone.clone().unwrap_or_else(|| "<unknown>".to_string())
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Read side of a migration: the legacy DNS provider records are copied from.
#[async_trait]
pub trait SourceProvider: Send + Sync {
    /// Provider identifier, e.g. `"dynect"`.
    fn id(&self) -> &'static str;

    /// Fetch a single zone's metadata.
    async fn get_zone(&self, zone: &str) -> Result<SourceZone>;

    /// List the names of every zone on the account.
    async fn list_zones(&self) -> Result<Vec<String>>;

    /// Fetch every record of a zone in one call.
    ///
    /// Records come back grouped by type in the order the provider reports
    /// them; within a type, provider order is kept.
    async fn get_zone_records(&self, zone: &str) -> Result<Vec<SourceRecord>>;
}

/// Write side of a migration: the hosted DNS service records are replayed into.
#[async_trait]
pub trait TargetProvider: Send + Sync {
    /// Provider identifier, e.g. `"route53"`.
    fn id(&self) -> &'static str;

    /// Create a hosted zone and return its id, pending change and delegation set.
    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest) -> Result<HostedZoneCreation>;

    /// Submit a change batch against a hosted zone in a single call.
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo>;
}
