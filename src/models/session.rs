use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ShowSession {
    pub id: Uuid,
    pub astronomy_show_id: Uuid,
    pub planetarium_dome_id: Uuid,
    pub show_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manageable for ShowSession {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "show_sessions",
            table: "show_sessions",
            ordering: "-show_time",
        }
    }
}

/// One row of the session listing aggregate: the session joined with its show
/// and dome, plus the live seat availability computed in the same query.
#[derive(Debug, Clone, FromRow)]
pub struct SessionWithAvailability {
    pub id: Uuid,
    pub show_time: DateTime<Utc>,
    pub astronomy_show_id: Uuid,
    pub astronomy_show_title: String,
    pub planetarium_dome_id: Uuid,
    pub planetarium_dome_name: String,
    pub tickets_available: i64,
}
