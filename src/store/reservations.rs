use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Reservation, ReservationWithTickets, SeatRequest, Ticket};
use crate::store::{tickets, Store};
use crate::utils::error::AppError;
use crate::utils::pagination::{Page, Pagination};

impl Store {
    /// Create a reservation and all of its tickets in one transaction.
    ///
    /// All tickets or none: any seat failing validation or losing the
    /// uniqueness race rolls back the reservation row and every ticket
    /// inserted before it (the transaction is dropped uncommitted).
    pub async fn create_reservation(
        &self,
        user_id: Uuid,
        requests: &[SeatRequest],
    ) -> Result<ReservationWithTickets, AppError> {
        if requests.is_empty() {
            return Err(AppError::field_validation(
                "tickets",
                "a reservation requires at least one ticket",
            ));
        }

        let mut tx = self.pool.begin().await?;

        let reservation = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (user_id) VALUES ($1) RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut inserted = Vec::with_capacity(requests.len());
        for request in requests {
            inserted.push(tickets::validate_and_insert(&mut tx, reservation.id, request).await?);
        }

        tx.commit().await?;

        Ok(ReservationWithTickets {
            reservation,
            tickets: inserted,
        })
    }

    /// A user only ever sees their own reservations: the query is scoped to
    /// the authenticated id, a client-supplied owner is never consulted.
    pub async fn list_reservations(
        &self,
        user_id: Uuid,
        pagination: Pagination,
    ) -> Result<Page<ReservationWithTickets>, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        let reservations = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT * FROM reservations
            WHERE user_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await?;

        let reservation_ids: Vec<Uuid> = reservations.iter().map(|r| r.id).collect();
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"SELECT * FROM tickets WHERE reservation_id = ANY($1) ORDER BY "row", seat"#,
        )
        .bind(&reservation_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_reservation: HashMap<Uuid, Vec<Ticket>> = HashMap::new();
        for ticket in tickets {
            by_reservation
                .entry(ticket.reservation_id)
                .or_default()
                .push(ticket);
        }

        let results = reservations
            .into_iter()
            .map(|reservation| {
                let tickets = by_reservation.remove(&reservation.id).unwrap_or_default();
                ReservationWithTickets {
                    reservation,
                    tickets,
                }
            })
            .collect();

        Ok(Page { count, results })
    }
}
