//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use dns_migrator_provider::{
    ChangeBatch, ChangeInfo, CreateHostedZoneRequest, HostedZoneCreation, ProviderError,
    RecordData, SourceProvider, SourceRecord, SourceZone, TargetProvider,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::ZoneLog;

type ProviderResult<T> = dns_migrator_provider::Result<T>;

// ===== MockSourceProvider =====

pub struct MockSourceProvider {
    /// zone → records，按插入顺序保存 zone 名称
    zones: RwLock<Vec<(String, Vec<SourceRecord>)>>,
    /// 记录 `get_zone_records` 的调用顺序
    fetched: RwLock<Vec<String>>,
}

impl MockSourceProvider {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            fetched: RwLock::new(Vec::new()),
        }
    }

    pub async fn add_zone(&self, zone: &str, records: Vec<SourceRecord>) {
        self.zones.write().await.push((zone.to_string(), records));
    }

    pub async fn fetched(&self) -> Vec<String> {
        self.fetched.read().await.clone()
    }

    fn not_found(zone: &str) -> ProviderError {
        ProviderError::ZoneNotFound {
            provider: "mock".to_string(),
            zone: zone.to_string(),
            raw_message: None,
        }
    }
}

#[async_trait]
impl SourceProvider for MockSourceProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get_zone(&self, zone: &str) -> ProviderResult<SourceZone> {
        let zones = self.zones.read().await;
        if zones.iter().any(|(name, _)| name == zone) {
            Ok(SourceZone {
                name: zone.to_string(),
                serial: 1,
                serial_style: "increment".to_string(),
                zone_type: "Primary".to_string(),
            })
        } else {
            Err(Self::not_found(zone))
        }
    }

    async fn list_zones(&self) -> ProviderResult<Vec<String>> {
        Ok(self
            .zones
            .read()
            .await
            .iter()
            .map(|(name, _)| name.clone())
            .collect())
    }

    async fn get_zone_records(&self, zone: &str) -> ProviderResult<Vec<SourceRecord>> {
        self.fetched.write().await.push(zone.to_string());
        self.zones
            .read()
            .await
            .iter()
            .find(|(name, _)| name == zone)
            .map(|(_, records)| records.clone())
            .ok_or_else(|| Self::not_found(zone))
    }
}

// ===== MockTargetProvider =====

pub struct MockTargetProvider {
    created: RwLock<Vec<CreateHostedZoneRequest>>,
    submitted: RwLock<Vec<(String, ChangeBatch)>>,
    /// 对这些 zone 的创建请求返回 `ZoneExists`
    fail_create: RwLock<Vec<String>>,
}

impl MockTargetProvider {
    pub fn new() -> Self {
        Self {
            created: RwLock::new(Vec::new()),
            submitted: RwLock::new(Vec::new()),
            fail_create: RwLock::new(Vec::new()),
        }
    }

    pub async fn fail_create_for(&self, zone: &str) {
        self.fail_create.write().await.push(zone.to_string());
    }

    pub async fn created(&self) -> Vec<CreateHostedZoneRequest> {
        self.created.read().await.clone()
    }

    pub async fn submitted(&self) -> Vec<(String, ChangeBatch)> {
        self.submitted.read().await.clone()
    }
}

pub fn test_name_servers() -> Vec<String> {
    vec![
        "ns-1.awsdns-01.org".to_string(),
        "ns-2.awsdns-02.com".to_string(),
    ]
}

#[async_trait]
impl TargetProvider for MockTargetProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn create_hosted_zone(
        &self,
        req: &CreateHostedZoneRequest,
    ) -> ProviderResult<HostedZoneCreation> {
        if self.fail_create.read().await.contains(&req.name) {
            return Err(ProviderError::ZoneExists {
                provider: "mock".to_string(),
                zone: req.name.clone(),
                raw_message: None,
            });
        }

        let mut created = self.created.write().await;
        created.push(req.clone());
        let n = created.len();

        Ok(HostedZoneCreation {
            zone_id: format!("Z{n}"),
            zone_name: req.name.clone(),
            change: ChangeInfo {
                id: format!("C{n}"),
                status: "PENDING".to_string(),
                submitted_at: None,
                comment: req.comment.clone(),
            },
            name_servers: test_name_servers(),
        })
    }

    async fn change_record_sets(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
    ) -> ProviderResult<ChangeInfo> {
        let mut submitted = self.submitted.write().await;
        submitted.push((zone_id.to_string(), batch.clone()));

        // 与 Route 53 一致：Changes 至少一条
        if batch.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: "mock".to_string(),
                param: "ChangeBatch".to_string(),
                detail: "Changes must contain at least one change".to_string(),
            });
        }

        Ok(ChangeInfo {
            id: format!("R{}", submitted.len()),
            status: "INSYNC".to_string(),
            submitted_at: None,
            comment: None,
        })
    }
}

// ===== MockZoneLog =====

pub struct MockZoneLog {
    info: RwLock<Vec<(String, Vec<String>)>>,
    errors: RwLock<Vec<(String, String)>>,
    /// 如果 Some，写入时返回此错误
    write_error: RwLock<Option<String>>,
}

impl MockZoneLog {
    pub fn new() -> Self {
        Self {
            info: RwLock::new(Vec::new()),
            errors: RwLock::new(Vec::new()),
            write_error: RwLock::new(None),
        }
    }

    pub async fn set_write_error(&self, err: Option<String>) {
        *self.write_error.write().await = err;
    }

    pub async fn info(&self) -> Vec<(String, Vec<String>)> {
        self.info.read().await.clone()
    }

    pub async fn errors(&self) -> Vec<(String, String)> {
        self.errors.read().await.clone()
    }
}

#[async_trait]
impl ZoneLog for MockZoneLog {
    async fn append_zone_info(&self, zone: &str, name_servers: &[String]) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.info
            .write()
            .await
            .push((zone.to_string(), name_servers.to_vec()));
        Ok(())
    }

    async fn append_zone_error(&self, zone: &str, error: &str) -> CoreResult<()> {
        if let Some(ref msg) = *self.write_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.errors
            .write()
            .await
            .push((zone.to_string(), error.to_string()));
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ServiceContext`
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockSourceProvider>,
    Arc<MockTargetProvider>,
    Arc<MockZoneLog>,
) {
    let source = Arc::new(MockSourceProvider::new());
    let target = Arc::new(MockTargetProvider::new());
    let zone_log = Arc::new(MockZoneLog::new());

    let ctx = Arc::new(ServiceContext::new(
        source.clone(),
        target.clone(),
        zone_log.clone(),
    ));

    (ctx, source, target, zone_log)
}

/// 构造测试记录
pub fn record(record_type: &str, fqdn: &str, data: RecordData) -> SourceRecord {
    SourceRecord {
        record_type: record_type.to_string(),
        fqdn: fqdn.to_string(),
        ttl: 300,
        data,
        rdata: serde_json::Value::Null,
    }
}

/// 构造 A 记录
pub fn a_record(fqdn: &str, address: &str) -> SourceRecord {
    record(
        "A",
        fqdn,
        RecordData::A {
            address: address.to_string(),
        },
    )
}

/// 构造不支持迁移的记录
pub fn unsupported_record(record_type: &str, fqdn: &str) -> SourceRecord {
    record(
        record_type,
        fqdn,
        RecordData::Unsupported {
            record_type: record_type.to_string(),
        },
    )
}

