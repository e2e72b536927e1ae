//! Generic admin surface.
//!
//! Every entity that wants to show up in the admin listing declares itself by
//! implementing [`Manageable`] in its own module; this composer only consumes
//! that capability interface. Adding an entity means implementing the trait
//! next to the model and appending the type in [`registry`].

use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::auth::Identity;
use crate::models::{
    AstronomyShow, PlanetariumDome, Reservation, ShowSession, ShowTheme, Ticket,
};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// How an entity presents itself to the generic admin composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    pub name: &'static str,
    pub table: &'static str,
    pub ordering: &'static str,
}

pub trait Manageable {
    fn resource() -> ResourceDescriptor;
}

pub fn registry() -> Vec<ResourceDescriptor> {
    vec![
        ShowTheme::resource(),
        AstronomyShow::resource(),
        PlanetariumDome::resource(),
        ShowSession::resource(),
        Reservation::resource(),
        Ticket::resource(),
    ]
}

#[derive(Debug, Serialize)]
pub struct ResourceSummary {
    #[serde(flatten)]
    pub resource: ResourceDescriptor,
    pub records: i64,
}

/// `GET /admin/resources`: each manageable entity with its live row count.
pub async fn list_resources(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Response, AppError> {
    identity.require_staff()?;

    let mut summaries = Vec::new();
    for resource in registry() {
        // Table names come from the compile-time descriptors above, never
        // from the request.
        let records: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", resource.table))
            .fetch_one(state.store.pool())
            .await?;
        summaries.push(ResourceSummary { resource, records });
    }

    Ok(success(summaries, "Admin resources retrieved"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_every_entity_once() {
        let registry = registry();
        assert_eq!(registry.len(), 6);

        let mut tables: Vec<_> = registry.iter().map(|r| r.table).collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), 6, "duplicate table in admin registry");
    }

    #[test]
    fn descriptor_names_match_their_tables() {
        for resource in registry() {
            assert_eq!(resource.name, resource.table);
        }
    }
}
