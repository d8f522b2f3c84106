//! Zone 迁移服务
//!
//! 逐个 zone 顺序执行：在目标端创建 hosted zone → 记录 nameserver →
//! 拉取源记录 → 转换为 change batch → 一次性提交。任一步失败即中止整个批次。

use std::sync::Arc;

use chrono::Utc;
use dns_migrator_provider::{ChangeBatch, CreateHostedZoneRequest};

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::transform::RecordTransformer;
use crate::types::ZoneMigrationResult;

/// Comment attached to every hosted zone this tool creates.
pub const MIGRATION_COMMENT: &str = "Migrated from Dynect";

/// Frontend callbacks around each zone migration.
///
/// Use `NoopMigrationHooks` when nothing needs to be reported.
#[async_trait::async_trait]
pub trait MigrationHooks: Send + Sync {
    /// Called with the batch right before it is submitted.
    async fn before_submit(&self, _zone: &str, _batch: &ChangeBatch) {}

    /// Called after a zone has been migrated.
    async fn zone_migrated(&self, _result: &ZoneMigrationResult) {}
}

/// No-op hooks.
pub struct NoopMigrationHooks;

#[async_trait::async_trait]
impl MigrationHooks for NoopMigrationHooks {}

/// 迁移服务
pub struct MigrationService {
    ctx: Arc<ServiceContext>,
    run_timestamp: i64,
}

impl MigrationService {
    /// 创建迁移服务，运行时间戳取当前时间
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self::with_run_timestamp(ctx, Utc::now().timestamp())
    }

    /// 使用指定的运行时间戳（Unix 秒）创建迁移服务
    #[must_use]
    pub fn with_run_timestamp(ctx: Arc<ServiceContext>, run_timestamp: i64) -> Self {
        Self { ctx, run_timestamp }
    }

    /// Caller reference sent with the zone creation: `"{zone}-{run_timestamp}"`.
    pub fn caller_reference(&self, zone: &str) -> String {
        format!("{zone}-{}", self.run_timestamp)
    }

    /// Migrate zones in order, stopping at the first failure.
    ///
    /// The failing zone is appended to the zone error log before the error is
    /// returned; zones after it are never attempted.
    pub async fn migrate_zones(
        &self,
        zones: &[String],
        hooks: &dyn MigrationHooks,
    ) -> CoreResult<Vec<ZoneMigrationResult>> {
        let mut results = Vec::with_capacity(zones.len());

        for zone in zones {
            match self.migrate_zone(zone, hooks).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("Migration of {zone} failed: {e}");
                    } else {
                        log::error!("Migration of {zone} failed: {e}");
                    }
                    if let Err(log_err) =
                        self.ctx.zone_log.append_zone_error(zone, &e.to_string()).await
                    {
                        log::warn!("Failed to record error for {zone}: {log_err}");
                    }
                    return Err(e);
                }
            }
        }

        log::info!("Migrated {} zone(s)", results.len());
        Ok(results)
    }

    /// Migrate a single zone.
    pub async fn migrate_zone(
        &self,
        zone: &str,
        hooks: &dyn MigrationHooks,
    ) -> CoreResult<ZoneMigrationResult> {
        log::info!("Migrating zone {zone}");

        // 1. 创建 hosted zone
        let request = CreateHostedZoneRequest {
            name: zone.to_string(),
            caller_reference: self.caller_reference(zone),
            comment: Some(MIGRATION_COMMENT.to_string()),
        };
        let created = self.ctx.target.create_hosted_zone(&request).await?;
        log::info!(
            "Created hosted zone {zone}: id={}, change={}, status={}",
            created.zone_id,
            created.change.id,
            created.change.status
        );

        // 2. 记录 nameserver
        self.ctx
            .zone_log
            .append_zone_info(zone, &created.name_servers)
            .await?;

        // 3. 拉取并转换源记录
        let records = self.ctx.source.get_zone_records(zone).await?;
        let report = RecordTransformer::build_change_batch(&records);
        log::info!(
            "{zone}: {} record(s) read, {} dropped, {} change(s)",
            report.records_seen,
            report.records_dropped,
            report.entries()
        );

        // 4. 提交（空 batch 同样提交，由目标端拒绝）
        hooks.before_submit(zone, &report.batch).await;
        if report.batch.is_empty() {
            log::warn!("{zone}: no migratable records, submitting an empty change batch");
        }
        let submission = self
            .ctx
            .target
            .change_record_sets(&created.zone_id, &report.batch)
            .await?;
        log::info!(
            "{zone}: change {} submitted ({})",
            submission.id,
            submission.status
        );

        let result = ZoneMigrationResult {
            zone: zone.to_string(),
            insync: created.change.is_insync(),
            zone_id: created.zone_id,
            change_id: created.change.id,
            name_servers: created.name_servers,
            records_seen: report.records_seen,
            records_dropped: report.records_dropped,
            entries: report.entries(),
            submission,
        };
        hooks.zone_migrated(&result).await;

        Ok(result)
    }
}
