use super::common::{
    resolve_cluster_ref_id, DeploymentDefaults, ProductCommon, ProductFamily, RefIds, UserSettings,
};
use super::error::ExpandError;
use super::state::{Block, ResourceState};
use super::topology::TopologyCommon;
use crate::api::models::{
    KibanaClusterPlan, KibanaClusterSettings, KibanaClusterTopologyElement, KibanaConfiguration,
    KibanaPayload,
};

pub(crate) fn expand_kibana_resources<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
    defaults: &DeploymentDefaults,
    elasticsearch_ref_ids: &[String],
) -> Result<Option<Vec<KibanaPayload>>, ExpandError> {
    let blocks = root.blocks(ProductFamily::Kibana.as_str())?;
    if blocks.is_empty() {
        return Ok(None);
    }

    let mut ref_ids = RefIds::default();
    let mut payloads = Vec::with_capacity(blocks.len());
    for block in &blocks {
        let common = ProductCommon::expand(block, ProductFamily::Kibana, defaults)?;
        ref_ids.claim(block, &common.ref_id)?;
        let elasticsearch_cluster_ref_id =
            resolve_cluster_ref_id(block, ProductFamily::Kibana, elasticsearch_ref_ids)?;

        let mut kibana = match block.single("config")? {
            Some(config) => expand_configuration(&config)?,
            None => KibanaConfiguration::default(),
        };
        kibana.version = Some(common.version);

        let cluster_topology = block
            .blocks("topology")?
            .iter()
            .map(expand_topology_element)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            ref_id = %common.ref_id,
            elasticsearch_cluster_ref_id = %elasticsearch_cluster_ref_id,
            topology = cluster_topology.len(),
            "expanded kibana resource"
        );

        payloads.push(KibanaPayload {
            elasticsearch_cluster_ref_id,
            region: common.region,
            ref_id: common.ref_id,
            settings: Some(KibanaClusterSettings {}),
            plan: KibanaClusterPlan {
                kibana,
                cluster_topology,
            },
        });
    }
    Ok(Some(payloads))
}

fn expand_topology_element<S: ResourceState + ?Sized>(
    topology: &Block<'_, S>,
) -> Result<KibanaClusterTopologyElement, ExpandError> {
    let common = TopologyCommon::expand(topology)?;
    let kibana = match topology.single("config")? {
        Some(config) => Some(expand_configuration(&config)?),
        None => None,
    };
    Ok(KibanaClusterTopologyElement {
        zone_count: common.zone_count,
        instance_configuration_id: common.instance_configuration_id,
        size: common.size,
        kibana,
    })
}

fn expand_configuration<S: ResourceState + ?Sized>(
    config: &Block<'_, S>,
) -> Result<KibanaConfiguration, ExpandError> {
    let user = UserSettings::expand(config)?;
    Ok(KibanaConfiguration {
        version: None,
        user_settings_yaml: user.yaml,
        user_settings_override_yaml: user.override_yaml,
        user_settings_json: user.json,
        user_settings_override_json: user.override_json,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::types::{AttributePath, DynamicValue};

    fn expand(json: &str, es: &[&str]) -> Result<Option<Vec<KibanaPayload>>, ExpandError> {
        let state = DynamicValue::decode_json(json.as_bytes()).unwrap();
        let root = Block::root(&state);
        let defaults = DeploymentDefaults::expand(&root)?;
        let es: Vec<String> = es.iter().map(|s| s.to_string()).collect();
        expand_kibana_resources(&root, &defaults, &es)
    }

    #[test]
    fn links_to_named_elasticsearch_cluster() {
        let payloads = expand(
            r#"{"region": "r", "version": "8.1.0",
                "kibana": [{"elasticsearch_cluster_ref_id": "logging",
                            "topology": [{"config": [{"user_settings_json": "{}"}]}]}]}"#,
            &["main-elasticsearch", "logging"],
        )
        .unwrap()
        .unwrap();

        let kibana = &payloads[0];
        assert_eq!(kibana.elasticsearch_cluster_ref_id, "logging");
        assert_eq!(kibana.ref_id, "main-kibana");
        assert_eq!(kibana.settings, Some(KibanaClusterSettings {}));
        assert_eq!(kibana.plan.kibana.version.as_deref(), Some("8.1.0"));
        assert_eq!(
            kibana.plan.cluster_topology[0].kibana,
            Some(KibanaConfiguration {
                user_settings_json: Some("{}".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn kibana_without_elasticsearch_is_rejected() {
        let err = expand(r#"{"region": "r", "version": "8.1.0", "kibana": [{}]}"#, &[])
            .unwrap_err();
        assert!(matches!(err, ExpandError::Dependency { .. }));
        assert_eq!(err.path(), Some(&AttributePath::parse("kibana.0")));
    }

    #[test]
    fn region_is_required_somewhere() {
        let err = expand(r#"{"version": "8.1.0", "kibana": [{}]}"#, &["main-elasticsearch"])
            .unwrap_err();
        assert_eq!(err.path(), Some(&AttributePath::parse("kibana.0.region")));
    }
}
