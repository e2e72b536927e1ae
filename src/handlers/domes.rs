use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::auth::Identity;
use crate::serializers::DomeOut;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct CreateDome {
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

pub async fn list_domes(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Response, AppError> {
    let domes = state.store.list_domes().await?;
    let out: Vec<DomeOut> = domes.into_iter().map(DomeOut::from).collect();
    Ok(success(out, "Planetarium domes retrieved"))
}

pub async fn create_dome(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateDome>,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let dome = state
        .store
        .create_dome(&payload.name, payload.rows, payload.seats_in_row)
        .await?;
    Ok(created(DomeOut::from(dome), "Planetarium dome created"))
}
