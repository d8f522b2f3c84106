//! Route 53 `TargetProvider` trait 实现

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::{normalize_domain_name, strip_id_prefix};
use crate::traits::{ErrorContext, ProviderErrorMapper, TargetProvider};
use crate::types::{ChangeBatch, ChangeInfo, CreateHostedZoneRequest, HostedZoneCreation};

use super::types::{
    ChangeInfoXml, ChangeResourceRecordSetsResponse, ChangeResourceRecordSetsXml,
    CreateHostedZoneResponse, CreateHostedZoneXml,
};
use super::{ROUTE53_API_VERSION, Route53Provider};

impl Route53Provider {
    fn convert_change_info(info: ChangeInfoXml) -> ChangeInfo {
        ChangeInfo {
            id: strip_id_prefix(&info.id, "/change/").to_string(),
            status: info.status,
            submitted_at: info.submitted_at,
            comment: info.comment,
        }
    }

    /// 将 `CreateHostedZone` 响应转换为内部结构
    pub(crate) fn convert_hosted_zone(resp: CreateHostedZoneResponse) -> HostedZoneCreation {
        HostedZoneCreation {
            zone_id: strip_id_prefix(&resp.hosted_zone.id, "/hostedzone/").to_string(),
            zone_name: normalize_domain_name(&resp.hosted_zone.name),
            change: Self::convert_change_info(resp.change_info),
            name_servers: resp.delegation_set.name_servers.items,
        }
    }
}

#[async_trait]
impl TargetProvider for Route53Provider {
    fn id(&self) -> &'static str {
        "route53"
    }

    async fn create_hosted_zone(&self, req: &CreateHostedZoneRequest) -> Result<HostedZoneCreation> {
        let path = format!("/{ROUTE53_API_VERSION}/hostedzone");
        let response: CreateHostedZoneResponse = self
            .post_xml(
                &path,
                &CreateHostedZoneXml::from(req),
                ErrorContext::zone(&req.name),
            )
            .await?;

        Ok(Self::convert_hosted_zone(response))
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<ChangeInfo> {
        // API 要求 Changes 至少一条
        if batch.is_empty() {
            return Err(ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "ChangeBatch".to_string(),
                detail: "Changes must contain at least one change".to_string(),
            });
        }

        let path = format!(
            "/{ROUTE53_API_VERSION}/hostedzone/{}/rrset",
            urlencoding::encode(zone_id)
        );
        let response: ChangeResourceRecordSetsResponse = self
            .post_xml(
                &path,
                &ChangeResourceRecordSetsXml::from(batch),
                ErrorContext::zone(zone_id),
            )
            .await?;

        Ok(Self::convert_change_info(response.change_info))
    }
}
