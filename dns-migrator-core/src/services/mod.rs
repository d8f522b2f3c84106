//! 业务逻辑服务层

mod migration_service;
mod statistics_service;
mod zone_service;

pub use migration_service::{MIGRATION_COMMENT, MigrationHooks, MigrationService, NoopMigrationHooks};
pub use statistics_service::{NoopStatisticsHooks, StatisticsHooks, StatisticsService};
pub use zone_service::ZoneService;

use std::sync::Arc;

use dns_migrator_provider::{SourceProvider, TargetProvider};

use crate::traits::ZoneLog;

/// 服务上下文 - 持有所有依赖
///
/// 前端需要创建此上下文，并注入 provider 客户端和 zone 日志实现。
pub struct ServiceContext {
    /// 源 DNS provider
    pub source: Arc<dyn SourceProvider>,
    /// 目标 DNS provider
    pub target: Arc<dyn TargetProvider>,
    /// 迁移结果日志
    pub zone_log: Arc<dyn ZoneLog>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        source: Arc<dyn SourceProvider>,
        target: Arc<dyn TargetProvider>,
        zone_log: Arc<dyn ZoneLog>,
    ) -> Self {
        Self {
            source,
            target,
            zone_log,
        }
    }
}
