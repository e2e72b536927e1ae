use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::auth::Identity;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct CreateTheme {
    pub name: String,
}

pub async fn list_themes(
    State(state): State<AppState>,
    _identity: Identity,
) -> Result<Response, AppError> {
    let themes = state.store.list_themes().await?;
    Ok(success(themes, "Show themes retrieved"))
}

pub async fn create_theme(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateTheme>,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let theme = state.store.create_theme(&payload.name).await?;
    Ok(created(theme, "Show theme created"))
}
