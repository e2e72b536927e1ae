use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlanetariumDome {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlanetariumDome {
    /// Derived, never stored: the seat grid is the single source of truth.
    pub fn capacity(&self) -> i64 {
        i64::from(self.rows) * i64::from(self.seats_in_row)
    }

    pub fn grid(&self) -> SeatGrid {
        SeatGrid {
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }
}

impl Manageable for PlanetariumDome {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "planetarium_domes",
            table: "planetarium_domes",
            ordering: "name",
        }
    }
}

/// The part of a dome's geometry a seat claim is checked against.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct SeatGrid {
    pub rows: i32,
    pub seats_in_row: i32,
}

/// A dome with a zero-row or zero-seat grid could never host a session, so
/// the dimensions are rejected before any SQL runs.
pub fn validate_dimensions(rows: i32, seats_in_row: i32) -> Result<(), AppError> {
    for (value, field) in [(rows, "rows"), (seats_in_row, "seats_in_row")] {
        if value < 1 {
            return Err(AppError::field_validation(
                field,
                format!("{field} must be at least 1"),
            ));
        }
    }
    Ok(())
}
