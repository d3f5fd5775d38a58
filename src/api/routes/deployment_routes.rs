use axum::{routing::post, Router};

use crate::api::controller::deployment::DeploymentController;
use crate::app_state::AppState;

pub fn deployment_routes() -> Router<AppState> {
    Router::new().route(
        "/createDeployment/{deployment_name}",
        post(DeploymentController::create_deployment),
    )
}
