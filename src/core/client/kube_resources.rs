/// Re-export the Kubernetes resource types used by the gateway from k8s-openapi
/// so the rest of the crate has one place to import them from.

pub use k8s_openapi::api::core::v1::{
    Container as K8sContainer,
    ContainerPort,
    Pod,
    PodSpec,
    PodTemplateSpec,
};

pub use k8s_openapi::api::apps::v1::{
    Deployment,
    DeploymentSpec,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::{
    LabelSelector,
    ObjectMeta,
};
