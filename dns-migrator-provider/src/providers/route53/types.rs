//! Route 53 REST/XML API type definition

use serde::{Deserialize, Serialize};

use crate::types::{ChangeBatch, CreateHostedZoneRequest};

use super::ROUTE53_XMLNS;

// ============ Requests ============

/// Body of `POST /2013-04-01/hostedzone`.
#[derive(Debug, Serialize)]
#[serde(rename = "CreateHostedZoneRequest")]
pub struct CreateHostedZoneXml<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "CallerReference")]
    pub caller_reference: &'a str,
    #[serde(rename = "HostedZoneConfig", skip_serializing_if = "Option::is_none")]
    pub hosted_zone_config: Option<HostedZoneConfigXml<'a>>,
}

#[derive(Debug, Serialize)]
pub struct HostedZoneConfigXml<'a> {
    #[serde(rename = "Comment")]
    pub comment: &'a str,
}

impl<'a> From<&'a CreateHostedZoneRequest> for CreateHostedZoneXml<'a> {
    fn from(req: &'a CreateHostedZoneRequest) -> Self {
        Self {
            xmlns: ROUTE53_XMLNS,
            name: &req.name,
            caller_reference: &req.caller_reference,
            hosted_zone_config: req
                .comment
                .as_deref()
                .map(|comment| HostedZoneConfigXml { comment }),
        }
    }
}

/// Body of `POST /2013-04-01/hostedzone/{Id}/rrset`.
#[derive(Debug, Serialize)]
#[serde(rename = "ChangeResourceRecordSetsRequest")]
pub struct ChangeResourceRecordSetsXml<'a> {
    #[serde(rename = "@xmlns")]
    pub xmlns: &'static str,
    #[serde(rename = "ChangeBatch")]
    pub change_batch: ChangeBatchXml<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChangeBatchXml<'a> {
    #[serde(rename = "Changes")]
    pub changes: ChangesXml<'a>,
}

#[derive(Debug, Serialize)]
pub struct ChangesXml<'a> {
    #[serde(rename = "Change")]
    pub items: Vec<ChangeXml<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ChangeXml<'a> {
    #[serde(rename = "Action")]
    pub action: &'static str,
    #[serde(rename = "ResourceRecordSet")]
    pub resource_record_set: ResourceRecordSetXml<'a>,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordSetXml<'a> {
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    #[serde(rename = "TTL")]
    pub ttl: u32,
    #[serde(rename = "ResourceRecords")]
    pub resource_records: ResourceRecordsXml<'a>,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordsXml<'a> {
    #[serde(rename = "ResourceRecord")]
    pub items: Vec<ResourceRecordXml<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ResourceRecordXml<'a> {
    #[serde(rename = "Value")]
    pub value: &'a str,
}

impl<'a> From<&'a ChangeBatch> for ChangeResourceRecordSetsXml<'a> {
    fn from(batch: &'a ChangeBatch) -> Self {
        let items = batch
            .changes
            .iter()
            .map(|change| {
                let set = &change.resource_record_set;
                ChangeXml {
                    action: change.action.as_str(),
                    resource_record_set: ResourceRecordSetXml {
                        name: &set.name,
                        record_type: &set.record_type,
                        ttl: set.ttl,
                        resource_records: ResourceRecordsXml {
                            items: set
                                .resource_records
                                .iter()
                                .map(|r| ResourceRecordXml { value: &r.value })
                                .collect(),
                        },
                    },
                }
            })
            .collect();

        Self {
            xmlns: ROUTE53_XMLNS,
            change_batch: ChangeBatchXml {
                changes: ChangesXml { items },
            },
        }
    }
}

// ============ Responses ============

/// Response of `CreateHostedZone`.
#[derive(Debug, Deserialize)]
pub struct CreateHostedZoneResponse {
    #[serde(rename = "HostedZone")]
    pub hosted_zone: HostedZoneXml,
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
    #[serde(rename = "DelegationSet")]
    pub delegation_set: DelegationSetXml,
}

#[derive(Debug, Deserialize)]
pub struct HostedZoneXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ChangeInfoXml {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SubmittedAt")]
    pub submitted_at: Option<String>,
    #[serde(rename = "Comment")]
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DelegationSetXml {
    #[serde(rename = "NameServers")]
    pub name_servers: NameServersXml,
}

#[derive(Debug, Deserialize)]
pub struct NameServersXml {
    #[serde(rename = "NameServer", default)]
    pub items: Vec<String>,
}

/// Response of `ChangeResourceRecordSets`.
#[derive(Debug, Deserialize)]
pub struct ChangeResourceRecordSetsResponse {
    #[serde(rename = "ChangeInfo")]
    pub change_info: ChangeInfoXml,
}

// ============ Errors ============

/// Error body: either `ErrorResponse/Error` or `InvalidChangeBatch/Messages`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetail>,
    #[serde(rename = "Messages")]
    pub messages: Option<ErrorMessages>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorMessages {
    #[serde(rename = "Message", default)]
    pub items: Vec<String>,
}
