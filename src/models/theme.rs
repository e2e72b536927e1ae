use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShowTheme {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manageable for ShowTheme {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "show_themes",
            table: "show_themes",
            ordering: "name",
        }
    }
}
