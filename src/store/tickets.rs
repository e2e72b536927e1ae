//! Ticket allocator: the single sanctioned write path for tickets.
//!
//! Nothing else in the crate inserts into `tickets`. Reservation creation
//! calls [`validate_and_insert`] once per requested seat, inside the
//! reservation's transaction, so a failed seat claim aborts the whole batch.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::models::dome::SeatGrid;
use crate::models::{SeatClaim, SeatRequest, Ticket};
use crate::utils::error::AppError;

/// Resolve the session's dome geometry, range-check the seat, then insert.
///
/// The range check is a fast reject; the unique index on
/// `(show_session_id, row, seat)` is the source of truth for double-booking,
/// so two racing claims of one seat are decided by the store, not by us.
pub(crate) async fn validate_and_insert(
    tx: &mut Transaction<'_, Postgres>,
    reservation_id: Uuid,
    request: &SeatRequest,
) -> Result<Ticket, AppError> {
    let grid = sqlx::query_as::<_, SeatGrid>(
        r#"
        SELECT d."rows", d.seats_in_row
        FROM show_sessions s
        JOIN planetarium_domes d ON d.id = s.planetarium_dome_id
        WHERE s.id = $1
        "#,
    )
    .bind(request.show_session_id)
    .fetch_optional(&mut **tx)
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "Show session {} does not exist",
            request.show_session_id
        ))
    })?;

    let claim = SeatClaim::new(request.row, request.seat, &grid)?;

    sqlx::query_as::<_, Ticket>(
        r#"
        INSERT INTO tickets ("row", seat, show_session_id, reservation_id)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(claim.row())
    .bind(claim.seat())
    .bind(request.show_session_id)
    .bind(reservation_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => AppError::field_validation(
            "seat",
            format!(
                "row {} seat {} is already taken for this session",
                claim.row(),
                claim.seat()
            ),
        ),
        _ => AppError::DatabaseError(e),
    })
}
