use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::admin::{Manageable, ResourceDescriptor};
use crate::models::dome::SeatGrid;
use crate::utils::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub show_session_id: Uuid,
    pub reservation_id: Uuid,
}

// `#[derive(sqlx::FromRow)]` cannot be used here: it expands to a local
// binding named after each field (`let row = row.try_get("row")?`), and a
// field called `row` shadows the `&PgRow` parameter, so later columns call
// `try_get` on an `i32`. This hand-written impl is the derive's expansion.
impl<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> for Ticket {
    fn from_row(row: &'r sqlx::postgres::PgRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row as _;
        Ok(Ticket {
            id: row.try_get("id")?,
            row: row.try_get("row")?,
            seat: row.try_get("seat")?,
            show_session_id: row.try_get("show_session_id")?,
            reservation_id: row.try_get("reservation_id")?,
        })
    }
}

impl Manageable for Ticket {
    fn resource() -> ResourceDescriptor {
        ResourceDescriptor {
            name: "tickets",
            table: "tickets",
            ordering: "row, seat",
        }
    }
}

/// One requested seat in a reservation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRequest {
    pub row: i32,
    pub seat: i32,
    pub show_session_id: Uuid,
}

/// A seat position already checked against a dome's grid.
///
/// This is the only way to obtain coordinates the ticket allocator will
/// insert: the fields are private, so a claim cannot be constructed around
/// the range check.
#[derive(Debug, Clone, Copy)]
pub struct SeatClaim {
    row: i32,
    seat: i32,
}

impl SeatClaim {
    pub fn new(row: i32, seat: i32, grid: &SeatGrid) -> Result<Self, AppError> {
        for (value, field, grid_field, bound) in [
            (row, "row", "rows", grid.rows),
            (seat, "seat", "seats_in_row", grid.seats_in_row),
        ] {
            if !(1..=bound).contains(&value) {
                return Err(AppError::field_validation(
                    field,
                    format!(
                        "{field} number must be in available range: \
                         (1, {grid_field}): (1, {bound})"
                    ),
                ));
            }
        }

        Ok(Self { row, seat })
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn seat(&self) -> i32 {
        self.seat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: SeatGrid = SeatGrid {
        rows: 20,
        seats_in_row: 20,
    };

    fn field_of(err: AppError) -> Option<String> {
        match err {
            AppError::Validation { field, .. } => field,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn last_seat_of_last_row_is_valid() {
        let claim = SeatClaim::new(20, 20, &GRID).unwrap();
        assert_eq!((claim.row(), claim.seat()), (20, 20));
    }

    #[test]
    fn row_past_the_grid_names_the_row_field() {
        let err = SeatClaim::new(21, 1, &GRID).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("row"));
    }

    #[test]
    fn row_error_reports_the_valid_bound() {
        let err = SeatClaim::new(21, 1, &GRID).unwrap_err();
        match err {
            AppError::Validation { message, .. } => {
                assert!(message.contains("(1, 20)"), "message was: {message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn seat_numbering_starts_at_one() {
        assert_eq!(
            field_of(SeatClaim::new(0, 1, &GRID).unwrap_err()).as_deref(),
            Some("row")
        );
        assert_eq!(
            field_of(SeatClaim::new(1, 0, &GRID).unwrap_err()).as_deref(),
            Some("seat")
        );
    }

    #[test]
    fn seat_past_the_row_names_the_seat_field() {
        let err = SeatClaim::new(1, 21, &GRID).unwrap_err();
        assert_eq!(field_of(err).as_deref(), Some("seat"));
    }
}
