//! Elastic Cloud API client
//!
//! Only the deployment create/update calls the provider needs; the request
//! bodies come from [`crate::resources::deployment`].

pub mod client;
pub mod common;
pub mod deployments;
pub mod error;
pub mod models;

pub use client::{Client, RetryConfig};
pub use common::{ApiErrorDetails, ApiErrorElement, ApiQueryParams};
pub use deployments::{CreateDeploymentParams, DeploymentsApi, UpdateDeploymentParams};
pub use error::ApiError;
