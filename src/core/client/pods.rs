use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::gateway::ClusterError;
use crate::core::client::kube_resources::Pod;

/// Fetch all pods in the cluster
pub async fn fetch_pods(client: &Client) -> Result<Vec<Pod>, ClusterError> {
    let pods: Api<Pod> = Api::all(client.clone());
    let pod_list = pods.list(&ListParams::default()).await?;

    debug!("Discovered {} pod(s)", pod_list.items.len());
    Ok(pod_list.items)
}
