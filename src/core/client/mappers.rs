/// Maps kube-rs / k8s-openapi types → internal domain models
use crate::core::client::kube_resources::Pod;
use crate::domain::pod::dto::pod_summary::PodSummary;

/// Converts a k8s-openapi Pod object into a PodSummary
pub fn map_pod_to_summary(pod: &Pod) -> PodSummary {
    let status = pod.status.as_ref();

    PodSummary {
        name: pod.metadata.name.clone(),
        namespace: pod.metadata.namespace.clone(),
        status: status.and_then(|s| s.phase.clone()),
        node_name: pod.spec.as_ref().and_then(|s| s.node_name.clone()),
        start_time: status.and_then(|s| s.start_time.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_scheduled_pod() {
        let pod: Pod = serde_json::from_value(json!({
            "metadata": { "name": "web-0", "namespace": "shop" },
            "spec": { "nodeName": "node-a", "containers": [] },
            "status": { "phase": "Running", "startTime": "2024-05-01T10:00:00Z" }
        }))
        .unwrap();

        let summary = map_pod_to_summary(&pod);

        assert_eq!(summary.name.as_deref(), Some("web-0"));
        assert_eq!(summary.namespace.as_deref(), Some("shop"));
        assert_eq!(summary.status.as_deref(), Some("Running"));
        assert_eq!(summary.node_name.as_deref(), Some("node-a"));
        assert!(summary.start_time.is_some());
    }

    #[test]
    fn unscheduled_pod_has_no_node_or_start_time() {
        let pod: Pod = serde_json::from_value(json!({
            "metadata": { "name": "pending-0", "namespace": "default" },
            "status": { "phase": "Pending" }
        }))
        .unwrap();

        let summary = map_pod_to_summary(&pod);

        assert_eq!(summary.status.as_deref(), Some("Pending"));
        assert!(summary.node_name.is_none());
        assert!(summary.start_time.is_none());
    }
}
