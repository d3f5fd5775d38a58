use anyhow::{Context, Result};
use kube::{Client, Config};
use tracing::debug;

/// Creates a Kubernetes client, either from the pod's service account
/// (`in_cluster`) or by inferring kubeconfig first and in-cluster second.
pub async fn build_kube_client(in_cluster: bool) -> Result<Client> {
    let config = if in_cluster {
        debug!("Using in-cluster configuration");
        Config::incluster().context("failed to load in-cluster kube configuration")?
    } else {
        debug!("Inferring kube configuration from environment");
        Config::infer()
            .await
            .context("failed to infer kube configuration")?
    };

    let client = Client::try_from(config).context("failed to build kube client")?;

    debug!("Kubernetes client initialized successfully");
    Ok(client)
}
