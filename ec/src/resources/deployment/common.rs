//! Helpers shared by every product family: deployment-wide defaults, ref_id
//! handling, Elasticsearch cluster references and user settings blobs.

use super::error::ExpandError;
use super::state::{Block, ResourceState};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProductFamily {
    Elasticsearch,
    Kibana,
    Apm,
    EnterpriseSearch,
}

impl ProductFamily {
    /// Name of the family's block in state and in the API's resources object
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductFamily::Elasticsearch => "elasticsearch",
            ProductFamily::Kibana => "kibana",
            ProductFamily::Apm => "apm",
            ProductFamily::EnterpriseSearch => "enterprise_search",
        }
    }

    pub fn default_ref_id(&self) -> String {
        format!("main-{}", self.as_str())
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment level attributes products inherit unless they set their own
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DeploymentDefaults {
    pub region: Option<String>,
    pub version: Option<String>,
    pub deployment_template_id: Option<String>,
}

impl DeploymentDefaults {
    pub fn expand<S: ResourceState + ?Sized>(root: &Block<'_, S>) -> Result<Self, ExpandError> {
        Ok(Self {
            region: root.string("region")?,
            version: root.string("version")?,
            deployment_template_id: root.string("deployment_template_id")?,
        })
    }
}

/// Identity and placement every product payload carries
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ProductCommon {
    pub ref_id: String,
    pub region: String,
    pub version: String,
}

impl ProductCommon {
    pub fn expand<S: ResourceState + ?Sized>(
        block: &Block<'_, S>,
        family: ProductFamily,
        defaults: &DeploymentDefaults,
    ) -> Result<Self, ExpandError> {
        let ref_id = block
            .string("ref_id")?
            .unwrap_or_else(|| family.default_ref_id());

        let region = block
            .string("region")?
            .or_else(|| defaults.region.clone())
            .ok_or_else(|| {
                ExpandError::schema(
                    block.attr_path("region"),
                    format!("{} region is required when the deployment sets none", family),
                )
            })?;

        let version = block
            .string("version")?
            .or_else(|| defaults.version.clone())
            .ok_or_else(|| {
                ExpandError::schema(
                    block.attr_path("version"),
                    format!("{} version is required when the deployment sets none", family),
                )
            })?;

        Ok(Self {
            ref_id,
            region,
            version,
        })
    }
}

/// Tracks the ref_ids already used within one family
#[derive(Debug, Default)]
pub(crate) struct RefIds {
    seen: BTreeSet<String>,
}

impl RefIds {
    pub fn claim<S: ResourceState + ?Sized>(
        &mut self,
        block: &Block<'_, S>,
        ref_id: &str,
    ) -> Result<(), ExpandError> {
        if self.seen.insert(ref_id.to_string()) {
            Ok(())
        } else {
            Err(ExpandError::schema(
                block.attr_path("ref_id"),
                format!("duplicate ref_id '{}'", ref_id),
            ))
        }
    }
}

/// Resolve which Elasticsearch payload a non-Elasticsearch product attaches to.
///
/// An explicit `elasticsearch_cluster_ref_id` must name one of
/// `elasticsearch_ref_ids`; otherwise the first Elasticsearch payload is used.
pub(crate) fn resolve_cluster_ref_id<S: ResourceState + ?Sized>(
    block: &Block<'_, S>,
    family: ProductFamily,
    elasticsearch_ref_ids: &[String],
) -> Result<String, ExpandError> {
    match block.string("elasticsearch_cluster_ref_id")? {
        Some(explicit) if elasticsearch_ref_ids.contains(&explicit) => Ok(explicit),
        Some(explicit) => Err(ExpandError::dependency(
            block.attr_path("elasticsearch_cluster_ref_id"),
            format!(
                "{} references elasticsearch ref_id '{}' which is not part of the deployment",
                family, explicit
            ),
        )),
        None => elasticsearch_ref_ids.first().cloned().ok_or_else(|| {
            ExpandError::dependency(
                block.path().clone(),
                format!("{} requires an elasticsearch resource in the same deployment", family),
            )
        }),
    }
}

/// User supplied settings overrides, copied verbatim as opaque strings
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct UserSettings {
    pub yaml: Option<String>,
    pub override_yaml: Option<String>,
    pub json: Option<String>,
    pub override_json: Option<String>,
}

impl UserSettings {
    pub fn expand<S: ResourceState + ?Sized>(config: &Block<'_, S>) -> Result<Self, ExpandError> {
        Ok(Self {
            yaml: config.string("user_settings_yaml")?,
            override_yaml: config.string("user_settings_override_yaml")?,
            json: config.string("user_settings_json")?,
            override_json: config.string("user_settings_override_json")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::types::{AttributePath, DynamicValue};

    fn state(json: &str) -> DynamicValue {
        DynamicValue::decode_json(json.as_bytes()).unwrap()
    }

    #[test]
    fn product_values_override_deployment_defaults() {
        let s = state(r#"{"kibana": [{"region": "eu-west-1", "ref_id": "secondary"}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("kibana").unwrap();
        let kibana = &blocks[0];
        let defaults = DeploymentDefaults {
            region: Some("us-east-1".to_string()),
            version: Some("7.7.0".to_string()),
            deployment_template_id: None,
        };

        let common = ProductCommon::expand(kibana, ProductFamily::Kibana, &defaults).unwrap();
        assert_eq!(
            common,
            ProductCommon {
                ref_id: "secondary".to_string(),
                region: "eu-west-1".to_string(),
                version: "7.7.0".to_string(),
            }
        );
    }

    #[test]
    fn missing_version_is_a_schema_error() {
        let s = state(r#"{"apm": [{"region": "r"}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("apm").unwrap();
        let apm = &blocks[0];

        let err =
            ProductCommon::expand(apm, ProductFamily::Apm, &DeploymentDefaults::default())
                .unwrap_err();
        assert_eq!(err.path(), Some(&AttributePath::parse("apm.0.version")));
    }

    #[test]
    fn duplicate_ref_ids_are_rejected() {
        let s = state(r#"{"kibana": [{}, {}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("kibana").unwrap();
        let mut ref_ids = RefIds::default();

        ref_ids.claim(&blocks[0], "main-kibana").unwrap();
        let err = ref_ids.claim(&blocks[1], "main-kibana").unwrap_err();
        assert_eq!(err.path(), Some(&AttributePath::parse("kibana.1.ref_id")));
    }

    #[test]
    fn cluster_ref_defaults_to_first_elasticsearch() {
        let s = state(r#"{"apm": [{}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("apm").unwrap();
        let apm = &blocks[0];
        let es = vec!["main-elasticsearch".to_string(), "other".to_string()];

        assert_eq!(
            resolve_cluster_ref_id(apm, ProductFamily::Apm, &es).unwrap(),
            "main-elasticsearch"
        );
    }

    #[test]
    fn unknown_explicit_cluster_ref_is_a_dependency_error() {
        let s = state(r#"{"apm": [{"elasticsearch_cluster_ref_id": "ghost"}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("apm").unwrap();
        let apm = &blocks[0];
        let es = vec!["main-elasticsearch".to_string()];

        let err = resolve_cluster_ref_id(apm, ProductFamily::Apm, &es).unwrap_err();
        assert!(matches!(err, ExpandError::Dependency { .. }));
    }

    #[test]
    fn missing_elasticsearch_is_a_dependency_error() {
        let s = state(r#"{"kibana": [{}]}"#);
        let root = Block::root(&s);
        let blocks = root.blocks("kibana").unwrap();
        let kibana = &blocks[0];

        let err = resolve_cluster_ref_id(kibana, ProductFamily::Kibana, &[]).unwrap_err();
        assert_eq!(
            err,
            ExpandError::dependency(
                AttributePath::parse("kibana.0"),
                "kibana requires an elasticsearch resource in the same deployment"
            )
        );
    }
}
