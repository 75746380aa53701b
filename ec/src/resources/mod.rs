//! Resource implementations

pub mod deployment;

pub use deployment::{create_resource_to_model, update_resource_to_model, ExpandError};
