//! Elastic Cloud deployment API models
//!
//! Request and response bodies for `/api/v1/deployments`. Field names follow
//! the API's snake_case JSON; optional fields are skipped when unset so a
//! present-but-empty block (`Some(Default::default())`) still serializes as
//! `{}`.

mod apm;
mod deployment;
mod elasticsearch;
mod enterprise_search;
mod kibana;
mod topology;

pub use apm::{ApmConfiguration, ApmPayload, ApmPlan, ApmSettings, ApmSystemSettings, ApmTopologyElement};
pub use deployment::{
    DeploymentCreateRequest, DeploymentCreateResources, DeploymentCreateResponse,
    DeploymentCreateSettings, DeploymentResource, DeploymentResources, DeploymentUpdateRequest,
    DeploymentUpdateResources, DeploymentUpdateResponse, ResourceCredentials,
    TrafficFilterSettings,
};
pub use elasticsearch::{
    DeploymentTemplateReference, ElasticsearchClusterPlan, ElasticsearchClusterSettings,
    ElasticsearchClusterTopologyElement, ElasticsearchConfiguration, ElasticsearchNodeType,
    ElasticsearchPayload, ManagedMonitoringSettings,
};
pub use enterprise_search::{
    EnterpriseSearchConfiguration, EnterpriseSearchNodeTypes, EnterpriseSearchPayload,
    EnterpriseSearchPlan, EnterpriseSearchSettings, EnterpriseSearchTopologyElement,
};
pub use kibana::{
    KibanaClusterPlan, KibanaClusterSettings, KibanaClusterTopologyElement, KibanaConfiguration,
    KibanaPayload,
};
pub use topology::{SizeResource, TopologySize};
