use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateDeploymentResponse {
    pub message: String,
    /// The deployment as stored by the API server, as JSON text.
    pub details: String,
}
