use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use serde::Serialize;

/// Per-pod view returned by `GET /getPromdetails`.
///
/// Every field mirrors the cluster object and is `null` when the pod lacks it
/// (e.g. an unscheduled pod has no node or start time).
#[derive(Debug, Clone, Serialize)]
pub struct PodSummary {
    pub name: Option<String>,
    pub namespace: Option<String>,
    /// Pod phase, e.g. `Running` or `Pending`.
    pub status: Option<String>,
    pub node_name: Option<String>,
    pub start_time: Option<Time>,
}

impl PodSummary {
    pub fn is_running(&self) -> bool {
        self.status.as_deref() == Some("Running")
    }
}
