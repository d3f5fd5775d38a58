use kube::api::PostParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::gateway::ClusterError;
use crate::core::client::kube_resources::Deployment;

/// Submit a deployment to the given namespace and return what the API server stored
pub async fn create_deployment(
    client: &Client,
    namespace: &str,
    deployment: &Deployment,
) -> Result<Deployment, ClusterError> {
    let deployments: Api<Deployment> = Api::namespaced(client.clone(), namespace);
    let created = deployments.create(&PostParams::default(), deployment).await?;

    debug!(
        "Created deployment {}/{}",
        namespace,
        created.metadata.name.as_deref().unwrap_or_default()
    );
    Ok(created)
}
