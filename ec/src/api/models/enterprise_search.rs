use super::topology::TopologySize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterpriseSearchPayload {
    pub elasticsearch_cluster_ref_id: String,
    pub region: String,
    pub ref_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<EnterpriseSearchSettings>,
    pub plan: EnterpriseSearchPlan,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterpriseSearchSettings {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterpriseSearchPlan {
    pub enterprise_search: EnterpriseSearchConfiguration,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_topology: Vec<EnterpriseSearchTopologyElement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EnterpriseSearchConfiguration {
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
pub struct EnterpriseSearchTopologyElement {
    pub zone_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<TopologySize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<EnterpriseSearchNodeTypes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_search: Option<EnterpriseSearchConfiguration>,
}

/// Which Enterprise Search roles the instances of a topology element run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnterpriseSearchNodeTypes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appserver: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<bool>,
}
