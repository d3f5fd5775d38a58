// Kube-rs based Kubernetes client
pub mod gateway;
pub mod kube_client;
pub mod kube_resources;
pub mod pods;
pub mod deployments;
pub mod mappers;
