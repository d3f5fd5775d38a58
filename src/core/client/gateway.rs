//! Seam between the HTTP handlers and the cluster control plane.

use async_trait::async_trait;
use kube::Client;
use thiserror::Error;

use crate::core::client::deployments::create_deployment;
use crate::core::client::kube_resources::{Deployment, Pod};
use crate::core::client::pods::fetch_pods;

#[derive(Debug, Error)]
pub enum ClusterError {
    /// The API server rejected the request with a status response.
    #[error("({code}) Reason: {reason}: {message}")]
    Api {
        code: u16,
        reason: String,
        message: String,
    },

    /// The request never produced a status response (connection, TLS, decoding).
    #[error("Kubernetes client error: {0}")]
    Transport(String),
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(response) => ClusterError::Api {
                code: response.code,
                reason: response.reason.clone(),
                message: response.message.clone(),
            },
            other => ClusterError::Transport(other.to_string()),
        }
    }
}


/// The cluster operations the service relies on.
#[async_trait]
pub trait ClusterGateway: Send + Sync {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, ClusterError>;

    /// Pods across every namespace.
    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError>;
}

/// `ClusterGateway` backed by a live kube-rs client.
#[derive(Clone)]
pub struct KubeGateway {
    client: Client,
}

impl KubeGateway {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterGateway for KubeGateway {
    async fn create_deployment(
        &self,
        namespace: &str,
        deployment: &Deployment,
    ) -> Result<Deployment, ClusterError> {
        create_deployment(&self.client, namespace, deployment).await
    }

    async fn list_pods(&self) -> Result<Vec<Pod>, ClusterError> {
        fetch_pods(&self.client).await
    }
}
