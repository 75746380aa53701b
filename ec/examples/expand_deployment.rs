//! Print the create and update bodies for an `ec_deployment` state file.
//!
//! ```text
//! cargo run -p ec --example expand_deployment -- state.json
//! ```
//!
//! Without an argument a small sample deployment is used. When `EC_API_KEY`
//! is set the create body is also sent with `validate_only=true`.

use ec::api::{Client, CreateDeploymentParams};
use ec::{create_resource_to_model, update_resource_to_model, ProviderConfig};
use std::env;
use tfplug::types::DynamicValue;

const SAMPLE_STATE: &str = r#"{
    "name": "example-deployment",
    "region": "us-east-1",
    "version": "8.11.1",
    "deployment_template_id": "aws-io-optimized-v2",
    "elasticsearch": [{
        "topology": [{
            "instance_configuration_id": "aws.es.datahot.i3",
            "zone_count": 2,
            "size": [{"value": "4g"}],
            "node_type": [{"data": true, "ingest": true, "master": true, "ml": false}]
        }]
    }],
    "kibana": [{
        "topology": [{"size": [{"value": "1g"}]}]
    }]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let raw = match env::args().nth(1) {
        Some(path) => std::fs::read(path)?,
        None => SAMPLE_STATE.as_bytes().to_vec(),
    };
    let state = DynamicValue::decode_json(&raw)?;

    let create = create_resource_to_model(&state).map_err(|e| e.to_diagnostic().detail)?;
    let update = update_resource_to_model(&state).map_err(|e| e.to_diagnostic().detail)?;

    println!("create request:\n{}", serde_json::to_string_pretty(&create)?);
    println!("update request:\n{}", serde_json::to_string_pretty(&update)?);

    if env::var("EC_API_KEY").is_ok() {
        let config = ProviderConfig::resolve(&DynamicValue::null())?;
        let client = Client::from_config(&config)?;
        let params = CreateDeploymentParams {
            request_id: None,
            validate_only: true,
        };
        let response = client.deployments().create(&create, &params).await?;
        println!("validated deployment '{}'", response.name);
    }

    Ok(())
}
