use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};
use crate::models::ticket::Ticket;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Manageable for Reservation {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "reservations",
            table: "reservations",
            ordering: "-created_at",
        }
    }
}

/// A reservation together with the tickets created in its transaction.
#[derive(Debug, Clone)]
pub struct ReservationWithTickets {
    pub reservation: Reservation,
    pub tickets: Vec<Ticket>,
}
