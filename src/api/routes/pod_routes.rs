use axum::{routing::get, Router};

use crate::api::controller::pod::PodController;
use crate::app_state::AppState;

pub fn pod_routes() -> Router<AppState> {
    Router::new().route("/getPromdetails", get(PodController::get_prom_details))
}
