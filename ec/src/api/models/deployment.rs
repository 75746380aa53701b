use super::{ApmPayload, ElasticsearchPayload, EnterpriseSearchPayload, KibanaPayload};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/deployments`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<DeploymentCreateSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<DeploymentCreateResources>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentCreateSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_filter_settings: Option<TrafficFilterSettings>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrafficFilterSettings {
    pub rulesets: Vec<String>,
}

/// Body of `PUT /api/v1/deployments/{deployment_id}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentUpdateRequest {
    pub name: String,
    /// Remove resources that exist server side but are missing from `resources`
    pub prune_orphans: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<DeploymentUpdateResources>,
}

/// Per product payload lists. A family that was not declared stays `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentResources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch: Option<Vec<ElasticsearchPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kibana: Option<Vec<KibanaPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apm: Option<Vec<ApmPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_search: Option<Vec<EnterpriseSearchPayload>>,
}

pub type DeploymentCreateResources = DeploymentResources;
pub type DeploymentUpdateResources = DeploymentResources;

/// Response of a successful create
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentCreateResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default)]
    pub resources: Vec<DeploymentResource>,
}

/// Response of a successful update
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentUpdateResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub resources: Vec<DeploymentResource>,
}

/// One resource created or updated by a deployment request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentResource {
    pub kind: String,
    pub ref_id: String,
    pub id: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ResourceCredentials>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceCredentials {
    pub username: String,
    pub password: String,
}
