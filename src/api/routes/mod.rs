//! API route declarations

pub mod deployment_routes;
pub mod pod_routes;
