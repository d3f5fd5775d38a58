use serde::Deserialize;

/// Body of `POST /createDeployment/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentRequest {
    pub image: String,
    /// Kubernetes stores replicas as int32; bounds are left to the API server.
    pub replicas: i32,
}
