use super::common::{
    resolve_cluster_ref_id, DeploymentDefaults, ProductCommon, ProductFamily, RefIds, UserSettings,
};
use super::error::ExpandError;
use super::state::{Block, ResourceState};
use super::topology::TopologyCommon;
use crate::api::models::{
    EnterpriseSearchConfiguration, EnterpriseSearchNodeTypes, EnterpriseSearchPayload,
    EnterpriseSearchPlan, EnterpriseSearchSettings, EnterpriseSearchTopologyElement,
};

pub(crate) fn expand_enterprise_search_resources<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
    defaults: &DeploymentDefaults,
    elasticsearch_ref_ids: &[String],
) -> Result<Option<Vec<EnterpriseSearchPayload>>, ExpandError> {
    let blocks = root.blocks(ProductFamily::EnterpriseSearch.as_str())?;
    if blocks.is_empty() {
        return Ok(None);
    }

    let mut ref_ids = RefIds::default();
    let mut payloads = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let common = ProductCommon::expand(block, ProductFamily::EnterpriseSearch, defaults)?;
        ref_ids.claim(block, &common.ref_id)?;
        let elasticsearch_cluster_ref_id =
            resolve_cluster_ref_id(block, ProductFamily::EnterpriseSearch, elasticsearch_ref_ids)?;

        let mut enterprise_search = match block.single("config")? {
            Some(config) => expand_configuration(&config)?,
            None => EnterpriseSearchConfiguration::default(),
        };
        enterprise_search.version = Some(common.version);

        let cluster_topology = block
            .blocks("topology")?
            .iter()
            .map(expand_topology_element)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            ref_id = %common.ref_id,
            elasticsearch_cluster_ref_id = %elasticsearch_cluster_ref_id,
            topology = cluster_topology.len(),
            "expanded enterprise search resource"
        );

        payloads.push(EnterpriseSearchPayload {
            elasticsearch_cluster_ref_id,
            region: common.region,
            ref_id: common.ref_id,
            settings: Some(EnterpriseSearchSettings {}),
            plan: EnterpriseSearchPlan {
                enterprise_search,
                cluster_topology,
            },
        });
    }
    Ok(Some(payloads))
}

fn expand_topology_element<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<EnterpriseSearchTopologyElement, ExpandError> {
    let common = TopologyCommon::expand(topology)?;

    let node_type = match topology.single("node_type")? {
        Some(node_type) => Some(EnterpriseSearchNodeTypes {
            appserver: node_type.bool("appserver")?,
            connector: node_type.bool("connector")?,
            worker: node_type.bool("worker")?,
        }),
        None => None,
    };

    let enterprise_search = match topology.single("config")? {
        Some(config) => Some(expand_configuration(&config)?),
        None => None,
    };

    Ok(EnterpriseSearchTopologyElement {
        zone_count: common.zone_count,
        instance_configuration_id: common.instance_configuration_id,
        size: common.size,
        node_type,
        enterprise_search,
    })
}

fn expand_configuration<S: ResourceState + ?Sized>(
    config: &Block<'_, S>,
) -> Result<EnterpriseSearchConfiguration, ExpandError> {
    let user = UserSettings::expand(config)?;
    Ok(EnterpriseSearchConfiguration {
        version: None,
        user_settings_yaml: user.yaml,
        user_settings_override_yaml: user.override_yaml,
        user_settings_json: user.json,
        user_settings_override_json: user.override_json,
    })
}
