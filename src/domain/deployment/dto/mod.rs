pub mod deployment_request;
