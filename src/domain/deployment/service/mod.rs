//! Deployment creation: request body → manifest → one create call.

use std::collections::BTreeMap;

use tracing::info;

use crate::core::client::gateway::{ClusterError, ClusterGateway};
use crate::core::client::kube_resources::{
    ContainerPort, Deployment, DeploymentSpec, K8sContainer, LabelSelector, ObjectMeta, PodSpec,
    PodTemplateSpec,
};
use crate::domain::deployment::dto::deployment_request::DeploymentRequest;

/// Deployments are always created here.
pub const DEPLOYMENT_NAMESPACE: &str = "default";

/// Every container exposes this port.
pub const CONTAINER_PORT: i32 = 80;

/// Build a single-container deployment whose pods are selected by `app=<name>`.
pub fn build_deployment(name: &str, request: &DeploymentRequest) -> Deployment {
    let labels = BTreeMap::from([("app".to_string(), name.to_string())]);

    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(request.replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![K8sContainer {
                        name: name.to_string(),
                        image: Some(request.image.clone()),
                        ports: Some(vec![ContainerPort {
                            container_port: CONTAINER_PORT,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub async fn create_deployment(
    gateway: &dyn ClusterGateway,
    name: &str,
    request: &DeploymentRequest,
) -> Result<Deployment, ClusterError> {
    let deployment = build_deployment(name, request);
    let created = gateway
        .create_deployment(DEPLOYMENT_NAMESPACE, &deployment)
        .await?;

    info!(
        "Deployment '{}' created in '{}' ({} replica(s) of {})",
        name, DEPLOYMENT_NAMESPACE, request.replicas, request.image
    );
    Ok(created)
}
