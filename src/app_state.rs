use std::sync::Arc;

use crate::core::client::gateway::{ClusterError, ClusterGateway};

macro_rules! delegate_gateway_service {
    ($(fn $name:ident($($arg:ident : $typ:ty),*) -> $ret:ty => $path:path;)+) => {
        $(
            pub async fn $name(&self, $($arg: $typ),*) -> Result<$ret, ClusterError> {
                $path(self.gateway.as_ref(), $($arg),*).await
            }
        )+
    };
}

#[derive(Clone)]
pub struct AppState {
    pub deployment_service: Arc<DeploymentService>,
    pub pod_status_service: Arc<PodStatusService>,
}

pub fn build_app_state(gateway: Arc<dyn ClusterGateway>) -> AppState {
    AppState {
        deployment_service: Arc::new(DeploymentService {
            gateway: gateway.clone(),
        }),
        pod_status_service: Arc::new(PodStatusService { gateway }),
    }
}

pub struct DeploymentService {
    gateway: Arc<dyn ClusterGateway>,
}

impl DeploymentService {
    delegate_gateway_service! {
        fn create_deployment(name: &str, request: &crate::domain::deployment::dto::deployment_request::DeploymentRequest) -> crate::core::client::kube_resources::Deployment => crate::domain::deployment::service::create_deployment;
    }
}

pub struct PodStatusService {
    gateway: Arc<dyn ClusterGateway>,
}

impl PodStatusService {
    delegate_gateway_service! {
        fn get_pod_status_report() -> crate::domain::pod::service::PodStatusReport => crate::domain::pod::service::get_pod_status_report;
    }
}
