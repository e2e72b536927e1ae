use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{SessionWithAvailability, ShowSession};
use crate::store::Store;
use crate::utils::error::AppError;

/// Listing filter. The date matches the stored timestamp's UTC calendar
/// date; the caller supplies no time of day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionFilter {
    pub date: Option<NaiveDate>,
    pub astronomy_show_id: Option<Uuid>,
}

/// The session listing aggregate: availability is computed in the query
/// itself (capacity minus sold tickets), one round trip for the whole page.
/// This is the hot path, it runs on every listing request.
const SESSION_AGGREGATE: &str = r#"
    SELECT s.id,
           s.show_time,
           s.astronomy_show_id,
           a.title AS astronomy_show_title,
           s.planetarium_dome_id,
           d.name AS planetarium_dome_name,
           d."rows"::bigint * d.seats_in_row::bigint - COUNT(t.id) AS tickets_available
    FROM show_sessions s
    JOIN astronomy_shows a ON a.id = s.astronomy_show_id
    JOIN planetarium_domes d ON d.id = s.planetarium_dome_id
    LEFT JOIN tickets t ON t.show_session_id = s.id
"#;

impl Store {
    pub async fn create_session(
        &self,
        astronomy_show_id: Uuid,
        planetarium_dome_id: Uuid,
        show_time: DateTime<Utc>,
    ) -> Result<ShowSession, AppError> {
        // Pre-checked so a missing reference 404s naming the right resource
        // instead of surfacing as a foreign-key database error.
        self.get_show(astronomy_show_id).await?;
        self.get_dome(planetarium_dome_id).await?;

        let session = sqlx::query_as::<_, ShowSession>(
            r#"
            INSERT INTO show_sessions (astronomy_show_id, planetarium_dome_id, show_time)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(astronomy_show_id)
        .bind(planetarium_dome_id)
        .bind(show_time)
        .fetch_one(&self.pool)
        .await?;

        Ok(session)
    }

    pub async fn list_sessions(
        &self,
        filter: SessionFilter,
    ) -> Result<Vec<SessionWithAvailability>, AppError> {
        let query = format!(
            r#"
            {SESSION_AGGREGATE}
            WHERE ($1::date IS NULL OR (s.show_time AT TIME ZONE 'UTC')::date = $1)
              AND ($2::uuid IS NULL OR s.astronomy_show_id = $2)
            GROUP BY s.id, a.title, d.name, d."rows", d.seats_in_row
            ORDER BY s.show_time DESC, s.id
            "#
        );

        let sessions = sqlx::query_as::<_, SessionWithAvailability>(&query)
            .bind(filter.date)
            .bind(filter.astronomy_show_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(sessions)
    }

    pub async fn get_session(&self, id: Uuid) -> Result<SessionWithAvailability, AppError> {
        let query = format!(
            r#"
            {SESSION_AGGREGATE}
            WHERE s.id = $1
            GROUP BY s.id, a.title, d.name, d."rows", d.seats_in_row
            "#
        );

        sqlx::query_as::<_, SessionWithAvailability>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Show session {id} does not exist")))
    }
}
