//! Elastic Cloud provider core
//!
//! Maps `ec_deployment` resource state onto deployment API requests and
//! sends them with a small retrying client.

pub mod api;
pub mod config;
pub mod resources;

pub use config::{ConfigError, ProviderConfig};
pub use resources::deployment::{
    create_resource_to_model, update_resource_to_model, ExpandError, ResourceState,
};
