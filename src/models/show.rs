use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};
use crate::models::theme::ShowTheme;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AstronomyShow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Public URI of the uploaded poster, set by the media store.
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manageable for AstronomyShow {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "astronomy_shows",
            table: "astronomy_shows",
            ordering: "title",
        }
    }
}

/// A show joined with its theme tags, the read model every show listing and
/// detail view is built from.
#[derive(Debug, Clone)]
pub struct ShowWithThemes {
    pub show: AstronomyShow,
    pub themes: Vec<ShowTheme>,
}
