use super::common::{DeploymentDefaults, ProductCommon, ProductFamily, RefIds, UserSettings};
use super::error::ExpandError;
use super::state::{Block, ResourceState};
use super::topology::TopologyCommon;
use crate::api::models::{
    DeploymentTemplateReference, ElasticsearchClusterPlan, ElasticsearchClusterSettings,
    ElasticsearchClusterTopologyElement, ElasticsearchConfiguration, ElasticsearchNodeType,
    ElasticsearchPayload, ManagedMonitoringSettings,
};

/// Build one payload per declared `elasticsearch` block, or `None` when the
/// deployment declares none.
pub(crate) fn expand_elasticsearch_resources<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
    defaults: &DeploymentDefaults,
) -> Result<Option<Vec<ElasticsearchPayload>>, ExpandError> {
    let blocks = root.blocks(ProductFamily::Elasticsearch.as_str())?;
    if blocks.is_empty() {
        return Ok(None);
    }

    let mut ref_ids = RefIds::default();
    let mut payloads = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let payload = expand_elasticsearch(block, defaults)?;
        ref_ids.claim(block, &payload.ref_id)?;
        tracing::debug!(
            ref_id = %payload.ref_id,
            topology = payload.plan.cluster_topology.len(),
            "expanded elasticsearch resource"
        );
        payloads.push(payload);
    }
    Ok(Some(payloads))
}

fn expand_elasticsearch<S: ResourceState + ?Sized>(
    block: &Block<'_, S>,
    defaults: &DeploymentDefaults,
) -> Result<ElasticsearchPayload, ExpandError> {
    let common = ProductCommon::expand(block, ProductFamily::Elasticsearch, defaults)?;

    let mut elasticsearch = match block.single("config")? {
        Some(config) => expand_configuration(&config)?,
        None => ElasticsearchConfiguration::default(),
    };
    elasticsearch.version = Some(common.version);

    let deployment_template = block
        .string("deployment_template_id")?
        .or_else(|| defaults.deployment_template_id.clone())
        .map(|id| DeploymentTemplateReference { id });

    let cluster_topology = block
        .blocks("topology")?
        .iter()
        .map(expand_topology_element)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ElasticsearchPayload {
        region: common.region,
        ref_id: common.ref_id,
        settings: Some(expand_settings(block)?),
        plan: ElasticsearchClusterPlan {
            elasticsearch,
            deployment_template,
            cluster_topology,
        },
    })
}

fn expand_settings<S: ResourceState + ?Sized>(
    block: &Block<'_, S>,
) -> Result<ElasticsearchClusterSettings, ExpandError> {
    let monitoring = match block.single("monitoring_settings")? {
        Some(monitoring) => monitoring
            .string("target_cluster_id")?
            .map(|target_cluster_id| ManagedMonitoringSettings { target_cluster_id }),
        None => None,
    };
    Ok(ElasticsearchClusterSettings { monitoring })
}

fn expand_topology_element<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<ElasticsearchClusterTopologyElement, ExpandError> {
    let common = TopologyCommon::expand(topology)?;

    let node_type = match topology.single("node_type")? {
        Some(node_type) => Some(ElasticsearchNodeType {
            data: node_type.bool("data")?,
            ingest: node_type.bool("ingest")?,
            master: node_type.bool("master")?,
            ml: node_type.bool("ml")?,
        }),
        None => None,
    };

    let elasticsearch = match topology.single("config")? {
        Some(config) => Some(expand_configuration(&config)?),
        None => None,
    };

    Ok(ElasticsearchClusterTopologyElement {
        zone_count: common.zone_count,
        instance_configuration_id: common.instance_configuration_id,
        size: common.size,
        node_type,
        elasticsearch,
    })
}

fn expand_configuration<S: ResourceState + ?Sized>(
    config: &Block<'_, S>,
) -> Result<ElasticsearchConfiguration, ExpandError> {
    let user = UserSettings::expand(config)?;
    Ok(ElasticsearchConfiguration {
        version: None,
        user_settings_yaml: user.yaml,
        user_settings_override_yaml: user.override_yaml,
        user_settings_json: user.json,
        user_settings_override_json: user.override_json,
    })
}
