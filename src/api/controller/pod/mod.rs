use axum::extract::State;
use axum::Json;

use crate::api::dto::pod_dto::PodDetailsResponse;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct PodController;

impl PodController {
    /// Pods in every namespace plus their `pod_running_status` exposition
    pub async fn get_prom_details(
        State(state): State<AppState>,
    ) -> Result<Json<PodDetailsResponse>, AppError> {
        let report = state.pod_status_service.get_pod_status_report().await?;

        Ok(Json(PodDetailsResponse {
            pod_details: report.pods,
            prometheus_metrics: report.exposition,
        }))
    }
}
