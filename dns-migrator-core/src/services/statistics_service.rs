//! 记录统计服务
//!
//! 按输入顺序逐个 zone 拉取记录并按类型计数，每个 zone 之间暂停一段时间，
//! 避免对源 API 造成压力。

use std::sync::Arc;
use std::time::Duration;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::RecordTypeCounts;

/// Frontend callback for running totals.
#[async_trait::async_trait]
pub trait StatisticsHooks: Send + Sync {
    /// Called after each zone with its record count and the running totals.
    async fn zone_counted(&self, _zone: &str, _records: usize, _totals: &RecordTypeCounts) {}
}

/// No-op hooks.
pub struct NoopStatisticsHooks;

#[async_trait::async_trait]
impl StatisticsHooks for NoopStatisticsHooks {}

/// 记录统计服务
pub struct StatisticsService {
    ctx: Arc<ServiceContext>,
    delay: Duration,
}

impl StatisticsService {
    /// 创建统计服务，`delay` 为 zone 之间的暂停时间
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>, delay: Duration) -> Self {
        Self { ctx, delay }
    }

    /// Count records per type across `zones`.
    ///
    /// A zone that cannot be fetched aborts the whole batch.
    pub async fn collect(
        &self,
        zones: &[String],
        hooks: &dyn StatisticsHooks,
    ) -> CoreResult<RecordTypeCounts> {
        let mut totals = RecordTypeCounts::new();

        for (i, zone) in zones.iter().enumerate() {
            if i > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            let records = self.ctx.source.get_zone_records(zone).await?;
            for record in &records {
                totals.add(&record.record_type);
            }
            log::info!(
                "{zone}: {} record(s), {} counted so far",
                records.len(),
                totals.total()
            );
            hooks.zone_counted(zone, records.len(), &totals).await;
        }

        Ok(totals)
    }
}
