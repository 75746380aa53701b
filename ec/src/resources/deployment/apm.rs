use super::common::{
    resolve_cluster_ref_id, DeploymentDefaults, ProductCommon, ProductFamily, RefIds, UserSettings,
};
use super::error::ExpandError;
use super::state::{Block, ResourceState};
use super::topology::TopologyCommon;
use crate::api::models::{
    ApmConfiguration, ApmPayload, ApmPlan, ApmSettings, ApmSystemSettings, ApmTopologyElement,
};

pub(crate) fn expand_apm_resources<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
    defaults: &DeploymentDefaults,
    elasticsearch_ref_ids: &[String],
) -> Result<Option<Vec<ApmPayload>>, ExpandError> {
    let blocks = root.blocks(ProductFamily::Apm.as_str())?;
    if blocks.is_empty() {
        return Ok(None);
    }

    let mut ref_ids = RefIds::default();
    let mut payloads = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let common = ProductCommon::expand(block, ProductFamily::Apm, defaults)?;
        ref_ids.claim(block, &common.ref_id)?;
        let elasticsearch_cluster_ref_id =
            resolve_cluster_ref_id(block, ProductFamily::Apm, elasticsearch_ref_ids)?;

        let mut apm = match block.single("config")? {
            Some(config) => expand_configuration(&config)?,
            None => ApmConfiguration::default(),
        };
        apm.version = Some(common.version);

        let cluster_topology = block
            .blocks("topology")?
            .iter()
            .map(expand_topology_element)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            ref_id = %common.ref_id,
            elasticsearch_cluster_ref_id = %elasticsearch_cluster_ref_id,
            topology = cluster_topology.len(),
            "expanded apm resource"
        );

        payloads.push(ApmPayload {
            elasticsearch_cluster_ref_id,
            region: common.region,
            ref_id: common.ref_id,
            settings: Some(ApmSettings {}),
            plan: ApmPlan {
                apm,
                cluster_topology,
            },
        });
    }
    Ok(Some(payloads))
}

fn expand_topology_element<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<ApmTopologyElement, ExpandError> {
    let common = TopologyCommon::expand(topology)?;
    let apm = match topology.single("config")? {
        Some(config) => Some(expand_configuration(&config)?),
        None => None,
    };
    Ok(ApmTopologyElement {
        zone_count: common.zone_count,
        instance_configuration_id: common.instance_configuration_id,
        size: common.size,
        apm,
    })
}

/// `debug_enabled` is the only APM system setting exposed in state
fn expand_configuration<S: ResourceState + ?Sized>(
    config: &Block<'_, S>,
) -> Result<ApmConfiguration, ExpandError> {
    let user = UserSettings::expand(config)?;
    let system_settings = config
        .bool("debug_enabled")?
        .map(|debug_enabled| ApmSystemSettings {
            debug_enabled: Some(debug_enabled),
        });
    Ok(ApmConfiguration {
        version: None,
        system_settings,
        user_settings_yaml: user.yaml,
        user_settings_override_yaml: user.override_yaml,
        user_settings_json: user.json,
        user_settings_override_json: user.override_json,
    })
}
