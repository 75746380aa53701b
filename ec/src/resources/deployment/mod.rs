//! `ec_deployment` state to deployment API request mapping

mod apm;
mod common;
mod elasticsearch;
mod enterprise_search;
mod error;
mod expanders;
mod kibana;
pub mod state;
mod topology;

pub use error::ExpandError;
pub use expanders::{create_resource_to_model, update_resource_to_model};
pub use state::{ResourceState, Scalar};

#[cfg(test)]
#[path = "./expanders_test.rs"]
mod expanders_test;
