//! Output shapes, one per (entity, operation) pair.
//!
//! Listing endpoints return summary shapes, detail endpoints return full
//! nested shapes, create endpoints echo their input. The mappings are plain
//! `From` impls so they can be tested without any transport.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{
    PlanetariumDome, ReservationWithTickets, SessionWithAvailability, ShowWithThemes, Ticket,
};
use crate::utils::pagination::Page;

#[derive(Debug, Serialize)]
pub struct ThemeRef {
    pub id: Uuid,
    pub name: String,
}

/// Show summary for listings: theme names only, no description.
#[derive(Debug, Serialize)]
pub struct ShowListItem {
    pub id: Uuid,
    pub title: String,
    pub themes: Vec<String>,
    pub image: Option<String>,
}

impl From<ShowWithThemes> for ShowListItem {
    fn from(value: ShowWithThemes) -> Self {
        Self {
            id: value.show.id,
            title: value.show.title,
            themes: value.themes.into_iter().map(|theme| theme.name).collect(),
            image: value.show.image,
        }
    }
}

/// Full show shape with nested theme objects and poster URI.
#[derive(Debug, Serialize)]
pub struct ShowDetail {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub themes: Vec<ThemeRef>,
    pub image: Option<String>,
}

impl From<ShowWithThemes> for ShowDetail {
    fn from(value: ShowWithThemes) -> Self {
        Self {
            id: value.show.id,
            title: value.show.title,
            description: value.show.description,
            themes: value
                .themes
                .into_iter()
                .map(|theme| ThemeRef {
                    id: theme.id,
                    name: theme.name,
                })
                .collect(),
            image: value.show.image,
        }
    }
}

/// Create echo: theme ids as submitted, no nested objects.
#[derive(Debug, Serialize)]
pub struct ShowCreated {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub show_themes: Vec<Uuid>,
}

impl From<ShowWithThemes> for ShowCreated {
    fn from(value: ShowWithThemes) -> Self {
        Self {
            id: value.show.id,
            title: value.show.title,
            description: value.show.description,
            show_themes: value.themes.into_iter().map(|theme| theme.id).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DomeOut {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i64,
}

impl From<PlanetariumDome> for DomeOut {
    fn from(value: PlanetariumDome) -> Self {
        Self {
            capacity: value.capacity(),
            id: value.id,
            name: value.name,
            rows: value.rows,
            seats_in_row: value.seats_in_row,
        }
    }
}

/// Session summary for listings: flat names plus live availability.
#[derive(Debug, Serialize)]
pub struct SessionListItem {
    pub id: Uuid,
    pub show_time: DateTime<Utc>,
    pub astronomy_show_title: String,
    pub planetarium_dome_name: String,
    pub tickets_available: i64,
}

impl From<SessionWithAvailability> for SessionListItem {
    fn from(value: SessionWithAvailability) -> Self {
        Self {
            id: value.id,
            show_time: value.show_time,
            astronomy_show_title: value.astronomy_show_title,
            planetarium_dome_name: value.planetarium_dome_name,
            tickets_available: value.tickets_available,
        }
    }
}

/// Full session shape with nested show detail and dome.
#[derive(Debug, Serialize)]
pub struct SessionDetail {
    pub id: Uuid,
    pub show_time: DateTime<Utc>,
    pub astronomy_show: ShowDetail,
    pub planetarium_dome: DomeOut,
    pub tickets_available: i64,
}

impl SessionDetail {
    pub fn new(
        session: SessionWithAvailability,
        show: ShowWithThemes,
        dome: PlanetariumDome,
    ) -> Self {
        Self {
            id: session.id,
            show_time: session.show_time,
            astronomy_show: show.into(),
            planetarium_dome: dome.into(),
            tickets_available: session.tickets_available,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketOut {
    pub id: Uuid,
    pub row: i32,
    pub seat: i32,
    pub show_session_id: Uuid,
}

impl From<Ticket> for TicketOut {
    fn from(value: Ticket) -> Self {
        Self {
            id: value.id,
            row: value.row,
            seat: value.seat,
            show_session_id: value.show_session_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationOut {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub tickets: Vec<TicketOut>,
}

impl From<ReservationWithTickets> for ReservationOut {
    fn from(value: ReservationWithTickets) -> Self {
        Self {
            id: value.reservation.id,
            created_at: value.reservation.created_at,
            tickets: value.tickets.into_iter().map(TicketOut::from).collect(),
        }
    }
}

pub fn reservation_page(page: Page<ReservationWithTickets>) -> Page<ReservationOut> {
    Page {
        count: page.count,
        results: page.results.into_iter().map(ReservationOut::from).collect(),
    }
}
