use serde::Serialize;

use crate::domain::pod::dto::pod_summary::PodSummary;

#[derive(Debug, Serialize)]
pub struct PodDetailsResponse {
    pub pod_details: Vec<PodSummary>,
    pub prometheus_metrics: String,
}
