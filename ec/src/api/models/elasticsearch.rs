use super::topology::TopologySize;
use serde::{Deserialize, Serialize};

/// Elasticsearch cluster entry of a deployment request
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticsearchPayload {
    pub region: String,
    pub ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ElasticsearchClusterSettings>,
    pub plan: ElasticsearchClusterPlan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticsearchClusterSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<ManagedMonitoringSettings>,
}

/// Ships this cluster's logs and metrics to another cluster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ManagedMonitoringSettings {
    pub target_cluster_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticsearchClusterPlan {
    pub elasticsearch: ElasticsearchConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_template: Option<DeploymentTemplateReference>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_topology: Vec<ElasticsearchClusterTopologyElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeploymentTemplateReference {
    pub id: String,
}

/// Version and user settings. Used both plan-wide and per topology element;
/// the user settings blobs are passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticsearchConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_override_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_override_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElasticsearchClusterTopologyElement {
    pub zone_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TopologySize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<ElasticsearchNodeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elasticsearch: Option<ElasticsearchConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElasticsearchNodeType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingest: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ml: Option<bool>,
}
