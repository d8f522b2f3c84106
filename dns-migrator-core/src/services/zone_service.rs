//! Zone 查询服务（只读，源 provider）

use std::sync::Arc;

use dns_migrator_provider::{SourceRecord, SourceZone};

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// Zone 查询服务
pub struct ZoneService {
    ctx: Arc<ServiceContext>,
}

impl ZoneService {
    /// 创建 Zone 服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 获取 zone 详情
    pub async fn get_zone(&self, zone: &str) -> CoreResult<SourceZone> {
        Ok(self.ctx.source.get_zone(zone).await?)
    }

    /// 列出源账户下的所有 zone
    pub async fn list_zones(&self) -> CoreResult<Vec<String>> {
        let zones = self.ctx.source.list_zones().await?;
        log::debug!("{} zone(s) on {}", zones.len(), self.ctx.source.id());
        Ok(zones)
    }

    /// 获取 zone 的所有记录（保持 provider 返回的顺序）
    pub async fn get_zone_records(&self, zone: &str) -> CoreResult<Vec<SourceRecord>> {
        let records = self.ctx.source.get_zone_records(zone).await?;
        log::debug!("{} record(s) in {zone}", records.len());
        Ok(records)
    }
}
