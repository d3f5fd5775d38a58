//! Pod status report: live pod list → summaries + exposition blob.

pub mod exposition;

use tracing::debug;

use crate::core::client::gateway::{ClusterError, ClusterGateway};
use crate::core::client::mappers::map_pod_to_summary;
use crate::domain::pod::dto::pod_summary::PodSummary;
use crate::domain::pod::service::exposition::render_pod_running_status;

pub struct PodStatusReport {
    pub pods: Vec<PodSummary>,
    pub exposition: String,
}

pub async fn get_pod_status_report(
    gateway: &dyn ClusterGateway,
) -> Result<PodStatusReport, ClusterError> {
    let pods: Vec<PodSummary> = gateway
        .list_pods()
        .await?
        .iter()
        .map(map_pod_to_summary)
        .collect();

    let running = pods.iter().filter(|p| p.is_running()).count();
    debug!("{} of {} pod(s) running", running, pods.len());

    let exposition = render_pod_running_status(&pods);
    Ok(PodStatusReport { pods, exposition })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::gateway::fake::FakeGateway;
    use crate::core::client::kube_resources::Pod;
    use serde_json::json;

    fn pod(name: &str, phase: &str) -> Pod {
        serde_json::from_value(json!({
            "metadata": { "name": name, "namespace": "default" },
            "spec": { "nodeName": "node-a", "containers": [] },
            "status": { "phase": phase, "startTime": "2024-05-01T10:00:00Z" }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn reports_running_and_pending() {
        let gateway = FakeGateway::with_pods(vec![pod("web-0", "Running"), pod("web-1", "Pending")]);

        let report = get_pod_status_report(&gateway).await.unwrap();

        assert_eq!(report.pods.len(), 2);
        assert_eq!(report.pods[0].name.as_deref(), Some("web-0"));
        assert_eq!(report.pods[0].status.as_deref(), Some("Running"));
        assert_eq!(report.pods[1].name.as_deref(), Some("web-1"));
        assert_eq!(report.pods[1].status.as_deref(), Some("Pending"));

        let line = |name: &str| {
            report
                .exposition
                .lines()
                .find(|l| l.contains(&format!("pod_name=\"{name}\"")))
                .map(str::to_string)
                .unwrap()
        };
        assert!(line("web-0").ends_with(" 1"));
        assert!(line("web-1").ends_with(" 0"));
    }

    #[tokio::test]
    async fn empty_cluster() {
        let gateway = FakeGateway::with_pods(Vec::new());

        let report = get_pod_status_report(&gateway).await.unwrap();

        assert!(report.pods.is_empty());
        assert!(!report.exposition.contains("pod_running_status{"));
    }

    #[tokio::test]
    async fn list_failure_is_propagated() {
        let gateway = FakeGateway::failing(403, "pods is forbidden");

        let err = get_pod_status_report(&gateway).await.err().unwrap();
        assert!(matches!(err, ClusterError::Api { code: 403, .. }));
    }
}
