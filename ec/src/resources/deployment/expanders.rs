//! Builders turning `ec_deployment` state into deployment API requests

use super::apm::expand_apm_resources;
use super::common::DeploymentDefaults;
use super::elasticsearch::expand_elasticsearch_resources;
use super::enterprise_search::expand_enterprise_search_resources;
use super::error::ExpandError;
use super::kibana::expand_kibana_resources;
use super::state::{Block, ResourceState};
use crate::api::models::{
    DeploymentCreateRequest, DeploymentCreateSettings, DeploymentResources,
    DeploymentUpdateRequest, TrafficFilterSettings,
};

/// Build the body of a create deployment request from resource state.
///
/// Pure: the state is only read, and the same state always produces an
/// equal request.
pub fn create_resource_to_model<S: ResourceState + ?Sized>(
    state: &S,
) -> Result<DeploymentCreateRequest, ExpandError> {
    let root = Block::root(state);
    let name = expand_name(&root)?;
    let settings = expand_create_settings(&root)?;
    let resources = expand_resources(&root)?;

    tracing::debug!(name = %name, "built deployment create request");

    Ok(DeploymentCreateRequest {
        name,
        settings,
        resources: Some(resources),
    })
}

/// Build the body of an update deployment request from resource state.
///
/// Resources are expanded exactly as for create. Traffic filter rulesets are
/// not part of the update body.
pub fn update_resource_to_model<S: ResourceState + ?Sized>(
    state: &S,
) -> Result<DeploymentUpdateRequest, ExpandError> {
    let root = Block::root(state);
    let name = expand_name(&root)?;
    let prune_orphans = root.bool("prune_orphans")?.unwrap_or(false);
    let resources = expand_resources(&root)?;

    tracing::debug!(name = %name, prune_orphans, "built deployment update request");

    Ok(DeploymentUpdateRequest {
        name,
        prune_orphans,
        resources: Some(resources),
    })
}

/// Any problem with `name` is a top level validation failure, whatever its cause
fn expand_name<S: ResourceState + ?Sized>(root: &Block<'_, S>) -> Result<String, ExpandError> {
    let name = root
        .string("name")
        .map_err(|err| ExpandError::Validation(format!("deployment name is invalid: {}", err)))?;
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ExpandError::Validation(
            "deployment name is required".to_string(),
        )),
    }
}

fn expand_create_settings<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
) -> Result<Option<DeploymentCreateSettings>, ExpandError> {
    let Some(settings) = root.single("settings")? else {
        return Ok(None);
    };
    let rulesets = settings.strings("traffic_filter")?.unwrap_or_default();
    if rulesets.is_empty() {
        return Ok(None);
    }
    Ok(Some(DeploymentCreateSettings {
        traffic_filter_settings: Some(TrafficFilterSettings { rulesets }),
    }))
}

/// Elasticsearch goes first so the other families can resolve the cluster
/// they attach to.
fn expand_resources<S: ResourceState + ?Sized>(
    root: &Block<'_, S>,
) -> Result<DeploymentResources, ExpandError> {
    let defaults = DeploymentDefaults::expand(root)?;

    let elasticsearch = expand_elasticsearch_resources(root, &defaults)?;
    let elasticsearch_ref_ids: Vec<String> = elasticsearch
        .iter()
        .flatten()
        .map(|payload| payload.ref_id.clone())
        .collect();

    let kibana = expand_kibana_resources(root, &defaults, &elasticsearch_ref_ids)?;
    let apm = expand_apm_resources(root, &defaults, &elasticsearch_ref_ids)?;
    let enterprise_search =
        expand_enterprise_search_resources(root, &defaults, &elasticsearch_ref_ids)?;

    Ok(DeploymentResources {
        elasticsearch,
        kibana,
        apm,
        enterprise_search,
    })
}
