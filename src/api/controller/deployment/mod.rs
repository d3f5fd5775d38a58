use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::deployment_dto::CreateDeploymentResponse;
use crate::app_state::AppState;
use crate::domain::deployment::dto::deployment_request::DeploymentRequest;
use crate::errors::{internal_error, AppError};

pub struct DeploymentController;

impl DeploymentController {
    pub async fn create_deployment(
        State(state): State<AppState>,
        Path(deployment_name): Path<String>,
        Json(payload): Json<DeploymentRequest>,
    ) -> Result<Json<CreateDeploymentResponse>, AppError> {
        let created = state
            .deployment_service
            .create_deployment(&deployment_name, &payload)
            .await?;

        Ok(Json(CreateDeploymentResponse {
            message: "Deployment created successfully".to_string(),
            details: serde_json::to_string(&created).map_err(internal_error)?,
        }))
    }
}
