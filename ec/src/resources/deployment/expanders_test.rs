#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::api::models::*;
    use serde_json::json;
    use tfplug::types::{AttributePath, DynamicValue};

    fn state_from(value: serde_json::Value) -> DynamicValue {
        DynamicValue::decode_json(value.to_string().as_bytes()).unwrap()
    }

    fn sample_state() -> serde_json::Value {
        json!({
            "name": "my_deployment_name",
            "region": "some-region",
            "deployment_template_id": "aws-io-optimized",
            "settings": [{
                "traffic_filter": ["0.0.0.0/0", "192.168.10.0/24"]
            }],
            "elasticsearch": [{
                "version": "7.7.0",
                "monitoring_settings": [{"target_cluster_id": "some"}],
                "topology": [{
                    "instance_configuration_id": "aws.data.highio.i3",
                    "zone_count": 1,
                    "size": [{"resource": "memory", "value": "2g"}],
                    "node_type": [{
                        "data": true,
                        "ingest": true,
                        "master": true,
                        "ml": false
                    }],
                    "config": [{
                        "user_settings_yaml": "some.setting: value",
                        "user_settings_override_yaml": "some.setting: value2",
                        "user_settings_json": "{\"some.setting\": \"value\"}",
                        "user_settings_override_json": "{\"some.setting\": \"value2\"}"
                    }]
                }]
            }],
            "kibana": [{
                "version": "7.7.0",
                "topology": [{
                    "instance_configuration_id": "aws.kibana.r4",
                    "zone_count": 1,
                    "size": [{"resource": "memory", "value": "1g"}]
                }]
            }],
            "apm": [{
                "version": "7.7.0",
                "config": [{"debug_enabled": false}],
                "topology": [{
                    "instance_configuration_id": "aws.apm.r4",
                    "zone_count": 1,
                    "size": [{"resource": "memory", "value": "0.5g"}],
                    "config": [{"debug_enabled": false}]
                }]
            }],
            "enterprise_search": [{
                "version": "7.7.0",
                "topology": [{
                    "instance_configuration_id": "aws.enterprisesearch.m5",
                    "zone_count": 1,
                    "size": [{"resource": "memory", "value": "2g"}],
                    "node_type": [{
                        "appserver": true,
                        "connector": true,
                        "worker": true
                    }]
                }]
            }]
        })
    }

    fn memory(value: i32) -> Option<TopologySize> {
        Some(TopologySize {
            resource: "memory".to_string(),
            value,
        })
    }

    fn version(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn expected_resources() -> DeploymentResources {
        DeploymentResources {
            elasticsearch: Some(vec![ElasticsearchPayload {
                region: "some-region".to_string(),
                ref_id: "main-elasticsearch".to_string(),
                settings: Some(ElasticsearchClusterSettings {
                    monitoring: Some(ManagedMonitoringSettings {
                        target_cluster_id: "some".to_string(),
                    }),
                }),
                plan: ElasticsearchClusterPlan {
                    elasticsearch: ElasticsearchConfiguration {
                        version: version("7.7.0"),
                        ..Default::default()
                    },
                    deployment_template: Some(DeploymentTemplateReference {
                        id: "aws-io-optimized".to_string(),
                    }),
                    cluster_topology: vec![ElasticsearchClusterTopologyElement {
                        zone_count: 1,
                        instance_configuration_id: Some("aws.data.highio.i3".to_string()),
                        size: memory(2048),
                        node_type: Some(ElasticsearchNodeType {
                            data: Some(true),
                            ingest: Some(true),
                            master: Some(true),
                            ml: Some(false),
                        }),
                        elasticsearch: Some(ElasticsearchConfiguration {
                            version: None,
                            user_settings_yaml: Some("some.setting: value".to_string()),
                            user_settings_override_yaml: Some("some.setting: value2".to_string()),
                            user_settings_json: Some(r#"{"some.setting": "value"}"#.to_string()),
                            user_settings_override_json: Some(
                                r#"{"some.setting": "value2"}"#.to_string(),
                            ),
                        }),
                    }],
                },
            }]),
            kibana: Some(vec![KibanaPayload {
                elasticsearch_cluster_ref_id: "main-elasticsearch".to_string(),
                region: "some-region".to_string(),
                ref_id: "main-kibana".to_string(),
                settings: Some(KibanaClusterSettings {}),
                plan: KibanaClusterPlan {
                    kibana: KibanaConfiguration {
                        version: version("7.7.0"),
                        ..Default::default()
                    },
                    cluster_topology: vec![KibanaClusterTopologyElement {
                        zone_count: 1,
                        instance_configuration_id: Some("aws.kibana.r4".to_string()),
                        size: memory(1024),
                        kibana: None,
                    }],
                },
            }]),
            apm: Some(vec![ApmPayload {
                elasticsearch_cluster_ref_id: "main-elasticsearch".to_string(),
                region: "some-region".to_string(),
                ref_id: "main-apm".to_string(),
                settings: Some(ApmSettings {}),
                plan: ApmPlan {
                    apm: ApmConfiguration {
                        version: version("7.7.0"),
                        system_settings: Some(ApmSystemSettings {
                            debug_enabled: Some(false),
                        }),
                        ..Default::default()
                    },
                    cluster_topology: vec![ApmTopologyElement {
                        zone_count: 1,
                        instance_configuration_id: Some("aws.apm.r4".to_string()),
                        size: memory(512),
                        apm: Some(ApmConfiguration {
                            system_settings: Some(ApmSystemSettings {
                                debug_enabled: Some(false),
                            }),
                            ..Default::default()
                        }),
                    }],
                },
            }]),
            enterprise_search: Some(vec![EnterpriseSearchPayload {
                elasticsearch_cluster_ref_id: "main-elasticsearch".to_string(),
                region: "some-region".to_string(),
                ref_id: "main-enterprise_search".to_string(),
                settings: Some(EnterpriseSearchSettings {}),
                plan: EnterpriseSearchPlan {
                    enterprise_search: EnterpriseSearchConfiguration {
                        version: version("7.7.0"),
                        ..Default::default()
                    },
                    cluster_topology: vec![EnterpriseSearchTopologyElement {
                        zone_count: 1,
                        instance_configuration_id: Some("aws.enterprisesearch.m5".to_string()),
                        size: memory(2048),
                        node_type: Some(EnterpriseSearchNodeTypes {
                            appserver: Some(true),
                            connector: Some(true),
                            worker: Some(true),
                        }),
                        enterprise_search: None,
                    }],
                },
            }]),
        }
    }

    #[test]
    fn test_create_resource_to_model_parses_the_resources() {
        let state = state_from(sample_state());

        let got = create_resource_to_model(&state).unwrap();

        let want = DeploymentCreateRequest {
            name: "my_deployment_name".to_string(),
            settings: Some(DeploymentCreateSettings {
                traffic_filter_settings: Some(TrafficFilterSettings {
                    rulesets: vec!["0.0.0.0/0".to_string(), "192.168.10.0/24".to_string()],
                }),
            }),
            resources: Some(expected_resources()),
        };
        assert_eq!(got, want);
    }

    #[test]
    fn test_update_resource_to_model_parses_the_resources() {
        let state = state_from(sample_state());

        let got = update_resource_to_model(&state).unwrap();

        let want = DeploymentUpdateRequest {
            name: "my_deployment_name".to_string(),
            prune_orphans: false,
            resources: Some(expected_resources()),
        };
        assert_eq!(got, want);
    }

    #[test]
    fn test_builders_are_idempotent() {
        let state = state_from(sample_state());

        assert_eq!(
            create_resource_to_model(&state).unwrap(),
            create_resource_to_model(&state).unwrap()
        );
        assert_eq!(
            update_resource_to_model(&state).unwrap(),
            update_resource_to_model(&state).unwrap()
        );
    }

    #[test]
    fn test_prune_orphans_is_read_from_state() {
        let mut raw = sample_state();
        raw["prune_orphans"] = json!(true);

        let got = update_resource_to_model(&state_from(raw)).unwrap();
        assert!(got.prune_orphans);
    }

    #[test]
    fn test_omitted_families_are_none() {
        let mut raw = sample_state();
        let obj = raw.as_object_mut().unwrap();
        obj.remove("apm");
        obj.insert("enterprise_search".to_string(), json!([]));

        let got = create_resource_to_model(&state_from(raw)).unwrap();
        let resources = got.resources.unwrap();
        assert_eq!(resources.apm, None);
        assert_eq!(resources.enterprise_search, None);
        assert!(resources.kibana.is_some());
    }

    #[test]
    fn test_name_only_state_has_empty_resources() {
        let state = state_from(json!({"name": "bare"}));

        let got = create_resource_to_model(&state).unwrap();
        assert_eq!(
            got,
            DeploymentCreateRequest {
                name: "bare".to_string(),
                settings: None,
                resources: Some(DeploymentResources::default()),
            }
        );
    }

    #[test]
    fn test_empty_traffic_filter_omits_settings() {
        let mut raw = sample_state();
        raw["settings"] = json!([{"traffic_filter": []}]);

        let got = create_resource_to_model(&state_from(raw)).unwrap();
        assert_eq!(got.settings, None);
    }

    #[test]
    fn test_deployment_version_propagates_to_every_plan() {
        let mut raw = sample_state();
        raw["version"] = json!("8.4.3");
        for family in ["elasticsearch", "kibana", "apm", "enterprise_search"] {
            raw[family][0].as_object_mut().unwrap().remove("version");
        }

        let resources = create_resource_to_model(&state_from(raw))
            .unwrap()
            .resources
            .unwrap();
        assert_eq!(
            resources.elasticsearch.unwrap()[0].plan.elasticsearch.version,
            version("8.4.3")
        );
        assert_eq!(resources.kibana.unwrap()[0].plan.kibana.version, version("8.4.3"));
        assert_eq!(resources.apm.unwrap()[0].plan.apm.version, version("8.4.3"));
        assert_eq!(
            resources.enterprise_search.unwrap()[0]
                .plan
                .enterprise_search
                .version,
            version("8.4.3")
        );
    }

    #[test]
    fn test_missing_name_is_a_validation_error() {
        let mut raw = sample_state();
        raw["name"] = json!("");

        let err = create_resource_to_model(&state_from(raw.clone())).unwrap_err();
        assert!(matches!(err, ExpandError::Validation(_)));

        raw["name"] = json!("   ");
        let err = create_resource_to_model(&state_from(raw.clone())).unwrap_err();
        assert_eq!(
            err,
            ExpandError::Validation("deployment name is required".to_string())
        );

        raw["name"] = json!(5);
        let err = update_resource_to_model(&state_from(raw.clone())).unwrap_err();
        assert!(matches!(err, ExpandError::Validation(_)), "got {:?}", err);
        assert!(err.path().is_none());
        assert!(err.to_string().contains("expected string, got number"));

        raw.as_object_mut().unwrap().remove("name");
        let err = update_resource_to_model(&state_from(raw)).unwrap_err();
        assert!(matches!(err, ExpandError::Validation(_)));
    }

    #[test]
    fn test_kibana_without_elasticsearch_is_a_dependency_error() {
        let mut raw = sample_state();
        raw.as_object_mut().unwrap().remove("elasticsearch");

        let err = create_resource_to_model(&state_from(raw)).unwrap_err();
        assert_eq!(
            err,
            ExpandError::dependency(
                AttributePath::parse("kibana.0"),
                "kibana requires an elasticsearch resource in the same deployment"
            )
        );
    }

    #[test]
    fn test_invalid_size_reports_full_path() {
        let mut raw = sample_state();
        raw["elasticsearch"][0]["topology"][0]["size"][0]["value"] = json!("two gigs");

        let err = update_resource_to_model(&state_from(raw)).unwrap_err();
        assert_eq!(
            err.path(),
            Some(&AttributePath::parse(
                "elasticsearch.0.topology.0.size.0.value"
            ))
        );
        let diag = err.to_diagnostic();
        assert_eq!(diag.summary, "Invalid deployment attribute");
    }

    #[test]
    fn test_topology_keeps_declaration_order() {
        let mut raw = sample_state();
        raw["elasticsearch"][0]["topology"] = json!([
            {"instance_configuration_id": "aws.data.highio.i3", "size": [{"value": 4096}]},
            {"instance_configuration_id": "aws.master.r5d", "size": [{"value": 1024}], "zone_count": 3},
            {"instance_configuration_id": "aws.ml.m5d", "size": [{"value": 0}]}
        ]);

        let resources = create_resource_to_model(&state_from(raw))
            .unwrap()
            .resources
            .unwrap();
        let topology = &resources.elasticsearch.unwrap()[0].plan.cluster_topology;
        let ids: Vec<_> = topology
            .iter()
            .map(|t| t.instance_configuration_id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, ["aws.data.highio.i3", "aws.master.r5d", "aws.ml.m5d"]);
        assert_eq!(topology[1].zone_count, 3);
        assert_eq!(topology[2].size, memory(0));
    }

    #[test]
    fn test_create_request_serializes_to_api_json() {
        let state = state_from(sample_state());
        let request = create_resource_to_model(&state).unwrap();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body["settings"],
            json!({"traffic_filter_settings": {"rulesets": ["0.0.0.0/0", "192.168.10.0/24"]}})
        );
        assert_eq!(body["resources"]["kibana"][0]["settings"], json!({}));
        assert_eq!(
            body["resources"]["kibana"][0]["elasticsearch_cluster_ref_id"],
            json!("main-elasticsearch")
        );
        assert_eq!(
            body["resources"]["elasticsearch"][0]["plan"]["cluster_topology"][0]["size"],
            json!({"resource": "memory", "value": 2048})
        );
        assert!(body["resources"]["kibana"][0]["plan"]["cluster_topology"][0]
            .get("kibana")
            .is_none());
    }

    #[test]
    fn test_update_request_serializes_prune_orphans() {
        let state = state_from(sample_state());
        let request = update_resource_to_model(&state).unwrap();

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["prune_orphans"], json!(false));
        assert!(body.get("settings").is_none());
    }
}
