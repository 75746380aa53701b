//! Deployment create/update endpoints

use crate::api::common::ApiQueryParams;
use crate::api::models::{
    DeploymentCreateRequest, DeploymentCreateResponse, DeploymentUpdateRequest,
    DeploymentUpdateResponse,
};
use crate::api::{ApiError, Client};
use uuid::Uuid;

/// Query parameters of `POST /api/v1/deployments`
#[derive(Debug, Clone, Default)]
pub struct CreateDeploymentParams {
    /// Idempotency token for the create call. When unset a fresh UUID is
    /// generated and every retry of that call reuses it.
    pub request_id: Option<String>,
    pub validate_only: bool,
}

/// Query parameters of `PUT /api/v1/deployments/{deployment_id}`
#[derive(Debug, Clone, Default)]
pub struct UpdateDeploymentParams {
    pub skip_snapshot: bool,
    pub validate_only: bool,
}

pub struct DeploymentsApi<'a> {
    client: &'a Client,
}

impl<'a> DeploymentsApi<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// POST /api/v1/deployments
    pub async fn create(
        &self,
        request: &DeploymentCreateRequest,
        params: &CreateDeploymentParams,
    ) -> Result<DeploymentCreateResponse, ApiError> {
        let request_id = params
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let query = ApiQueryParams::new()
            .add("request_id", &request_id)
            .add_flag("validate_only", params.validate_only);
        let path = format!("/api/v1/deployments{}", query.to_query_string());
        tracing::debug!(request_id = %request_id, "creating deployment");
        self.client.post(&path, request).await
    }

    /// PUT /api/v1/deployments/{deployment_id}
    pub async fn update(
        &self,
        deployment_id: &str,
        request: &DeploymentUpdateRequest,
        params: &UpdateDeploymentParams,
    ) -> Result<DeploymentUpdateResponse, ApiError> {
        let query = ApiQueryParams::new()
            .add_flag("skip_snapshot", params.skip_snapshot)
            .add_flag("validate_only", params.validate_only);
        let path = format!(
            "/api/v1/deployments/{}{}",
            urlencoding::encode(deployment_id),
            query.to_query_string()
        );
        self.client.put(&path, request).await
    }
}
