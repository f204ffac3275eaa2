use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::vehicle::adapters::inbound::http as vehicle_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/1/vehicles", get(vehicle_http::list_vehicles))
        .route(
            "/api/1/vehicles/{vin}/command/{command}",
            post(vehicle_http::handle_command),
        )
        .with_state(state)
}
