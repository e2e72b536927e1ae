use axum::response::Response;
use serde::Serialize;

use crate::utils::response::success;

pub mod domes;
pub mod reservations;
pub mod sessions;
pub mod shows;
pub mod themes;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "planetarium-api",
    };

    success(payload, "Health check successful")
}
