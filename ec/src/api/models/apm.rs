use super::topology::TopologySize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApmPayload {
    pub elasticsearch_cluster_ref_id: String,
    pub region: String,
    pub ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ApmSettings>,
    pub plan: ApmPlan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApmSettings {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApmPlan {
    pub apm: ApmConfiguration,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_topology: Vec<ApmTopologyElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApmConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<ApmSystemSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_override_yaml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_settings_override_json: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApmSystemSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApmTopologyElement {
    pub zone_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TopologySize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apm: Option<ApmConfiguration>,
}
