use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::Identity;
use crate::serializers::{SessionDetail, SessionListItem};
use crate::state::AppState;
use crate::store::SessionFilter;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Filter by astronomy show id.
    pub astronomy_show: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSession {
    pub astronomy_show: Uuid,
    pub planetarium_dome: Uuid,
    pub show_time: DateTime<Utc>,
}

pub async fn list_sessions(
    State(state): State<AppState>,
    _identity: Identity,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let filter = SessionFilter {
        date: parse_date(query.date.as_deref())?,
        astronomy_show_id: parse_show_id(query.astronomy_show.as_deref())?,
    };

    let sessions = state.store.list_sessions(filter).await?;
    let items: Vec<SessionListItem> = sessions.into_iter().map(SessionListItem::from).collect();
    Ok(success(items, "Show sessions retrieved"))
}

pub async fn get_session(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = state.store.get_session(id).await?;
    let show = state.store.get_show(session.astronomy_show_id).await?;
    let dome = state.store.get_dome(session.planetarium_dome_id).await?;

    Ok(success(
        SessionDetail::new(session, show, dome),
        "Show session retrieved",
    ))
}

pub async fn create_session(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateSession>,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let session = state
        .store
        .create_session(
            payload.astronomy_show,
            payload.planetarium_dome,
            payload.show_time,
        )
        .await?;
    Ok(created(session, "Show session created"))
}

fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    let Some(raw) = raw else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            AppError::field_validation("date", format!("'{raw}' is not a date (expected YYYY-MM-DD)"))
        })
}

fn parse_show_id(raw: Option<&str>) -> Result<Option<Uuid>, AppError> {
    let Some(raw) = raw else { return Ok(None) };
    if raw.is_empty() {
        return Ok(None);
    }

    Uuid::parse_str(raw).map(Some).map_err(|_| {
        AppError::field_validation("astronomy_show", format!("'{raw}' is not a valid id"))
    })
}
