use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use serde::Deserialize;

use crate::auth::Identity;
use crate::models::SeatRequest;
use crate::serializers::{self, ReservationOut};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::pagination::Pagination;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub tickets: Vec<SeatRequest>,
}

/// Listing is always scoped to the caller's own identity.
pub async fn list_reservations(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError> {
    let pagination = Pagination::clamped(
        query.page,
        query.page_size,
        state.config.reservation_page_size,
        state.config.reservation_max_page_size,
    );

    let page = state
        .store
        .list_reservations(identity.user_id, pagination)
        .await?;
    Ok(success(
        serializers::reservation_page(page),
        "Reservations retrieved",
    ))
}

pub async fn create_reservation(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateReservation>,
) -> Result<Response, AppError> {
    let reservation = state
        .store
        .create_reservation(identity.user_id, &payload.tickets)
        .await?;
    Ok(created(
        ReservationOut::from(reservation),
        "Reservation created",
    ))
}
