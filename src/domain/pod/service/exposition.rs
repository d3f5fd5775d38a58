//! Prometheus text rendering for pod phase.
//!
//! Each call builds its own recorder and never installs it globally, so
//! concurrent reports cannot see each other's samples.

use metrics::{describe_gauge, gauge};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::domain::pod::dto::pod_summary::PodSummary;

pub const POD_RUNNING_STATUS: &str = "pod_running_status";

/// Render `pod_running_status{namespace, pod_name, node_name}` per pod:
/// `1` when the phase is `Running`, `0` otherwise.
pub fn render_pod_running_status(pods: &[PodSummary]) -> String {
    let recorder = PrometheusBuilder::new().build_recorder();

    metrics::with_local_recorder(&recorder, || {
        describe_gauge!(POD_RUNNING_STATUS, "Pod running status");

        for pod in pods {
            let value = if pod.is_running() { 1.0 } else { 0.0 };
            gauge!(
                POD_RUNNING_STATUS,
                "namespace" => label(&pod.namespace),
                "pod_name" => label(&pod.name),
                "node_name" => label(&pod.node_name)
            )
            .set(value);
        }
    });

    recorder.handle().render()
}

/// Missing values become `""` rather than a `"None"` placeholder string.
fn label(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
