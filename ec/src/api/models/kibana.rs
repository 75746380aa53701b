use super::topology::TopologySize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KibanaPayload {
    pub elasticsearch_cluster_ref_id: String,
    pub region: String,
    pub ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<KibanaClusterSettings>,
    pub plan: KibanaClusterPlan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KibanaClusterSettings {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KibanaClusterPlan {
    pub kibana: KibanaConfiguration,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_topology: Vec<KibanaClusterTopologyElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KibanaConfiguration {
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
pub struct KibanaClusterTopologyElement {
    pub zone_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TopologySize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kibana: Option<KibanaConfiguration>,
}
