//! Response bodies of the HTTP API

pub mod deployment_dto;
pub mod pod_dto;
