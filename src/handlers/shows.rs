use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::Identity;
use crate::serializers::{ShowCreated, ShowDetail, ShowListItem};
use crate::state::AppState;
use crate::store::ShowFilter;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Comma-separated theme ids, e.g. `?themes=<uuid>,<uuid>`.
    pub themes: Option<String>,
    /// Case-insensitive title substring.
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateShow {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub show_themes: Vec<Uuid>,
}

pub async fn list_shows(
    State(state): State<AppState>,
    _identity: Identity,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let filter = ShowFilter {
        theme_ids: parse_uuid_list("themes", query.themes.as_deref())?,
        title: query.title.filter(|title| !title.is_empty()),
    };

    let shows = state.store.list_shows(&filter).await?;
    let items: Vec<ShowListItem> = shows.into_iter().map(ShowListItem::from).collect();
    Ok(success(items, "Astronomy shows retrieved"))
}

pub async fn get_show(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let show = state.store.get_show(id).await?;
    Ok(success(ShowDetail::from(show), "Astronomy show retrieved"))
}

pub async fn create_show(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateShow>,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let show = state
        .store
        .create_show(&payload.title, &payload.description, &payload.show_themes)
        .await?;
    Ok(created(ShowCreated::from(show), "Astronomy show created"))
}

/// `POST /astronomy_shows/:id/upload-image`, multipart field `image`.
pub async fn upload_image(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let show = state.store.get_show(id).await?;

    let mut payload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::field_validation("image", format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let bytes = field.bytes().await.map_err(|e| {
                AppError::field_validation("image", format!("could not read image field: {e}"))
            })?;
            payload = Some(bytes);
            break;
        }
    }

    let Some(bytes) = payload else {
        return Err(AppError::field_validation("image", "image field is required"));
    };

    let uri = state
        .media
        .store_show_image(&show.show.title, &bytes)
        .await?;
    state.store.set_show_image(id, &uri).await?;

    Ok(success(json!({ "id": id, "image": uri }), "Image uploaded"))
}

pub(crate) fn parse_uuid_list(
    field: &str,
    raw: Option<&str>,
) -> Result<Option<Vec<Uuid>>, AppError> {
    let Some(raw) = raw else { return Ok(None) };
    if raw.trim().is_empty() {
        return Ok(None);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            Uuid::parse_str(part).map_err(|_| {
                AppError::field_validation(field, format!("'{part}' is not a valid id"))
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
