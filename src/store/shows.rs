use std::collections::HashMap;

use sqlx::FromRow;
use uuid::Uuid;

use crate::models::{AstronomyShow, ShowTheme, ShowWithThemes};
use crate::store::Store;
use crate::utils::error::AppError;

const TITLE_MAX_LEN: usize = 64;

/// Listing filter: a show matches if it carries ANY of the requested theme
/// ids, and/or its title contains the given substring case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct ShowFilter {
    pub theme_ids: Option<Vec<Uuid>>,
    pub title: Option<String>,
}

#[derive(FromRow)]
struct ThemeLink {
    astronomy_show_id: Uuid,
    #[sqlx(flatten)]
    theme: ShowTheme,
}

impl Store {
    pub async fn create_show(
        &self,
        title: &str,
        description: &str,
        theme_ids: &[Uuid],
    ) -> Result<ShowWithThemes, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::field_validation("title", "title must not be blank"));
        }
        if title.len() > TITLE_MAX_LEN {
            return Err(AppError::field_validation(
                "title",
                format!("title must be at most {TITLE_MAX_LEN} characters"),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let show = sqlx::query_as::<_, AstronomyShow>(
            r#"
            INSERT INTO astronomy_shows (title, description)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(description)
        .fetch_one(&mut *tx)
        .await?;

        for theme_id in theme_ids {
            sqlx::query(
                r#"
                INSERT INTO astronomy_show_themes (astronomy_show_id, show_theme_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(show.id)
            .bind(theme_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    AppError::field_validation(
                        "show_themes",
                        format!("show theme {theme_id} does not exist"),
                    )
                }
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::field_validation(
                        "show_themes",
                        format!("show theme {theme_id} given more than once"),
                    )
                }
                _ => AppError::DatabaseError(e),
            })?;
        }

        let themes = sqlx::query_as::<_, ShowTheme>(
            "SELECT * FROM show_themes WHERE id = ANY($1) ORDER BY name, id",
        )
        .bind(theme_ids)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ShowWithThemes { show, themes })
    }

    /// Single filtered query plus one theme fetch for the whole result set;
    /// the `EXISTS` subquery keeps multi-theme matches deduplicated.
    pub async fn list_shows(&self, filter: &ShowFilter) -> Result<Vec<ShowWithThemes>, AppError> {
        let shows = sqlx::query_as::<_, AstronomyShow>(
            r#"
            SELECT s.*
            FROM astronomy_shows s
            WHERE ($1::uuid[] IS NULL OR EXISTS (
                      SELECT 1 FROM astronomy_show_themes st
                      WHERE st.astronomy_show_id = s.id
                        AND st.show_theme_id = ANY($1)))
              AND ($2::text IS NULL OR s.title ILIKE '%' || $2 || '%')
            ORDER BY s.title, s.id
            "#,
        )
        .bind(&filter.theme_ids)
        .bind(&filter.title)
        .fetch_all(&self.pool)
        .await?;

        self.attach_themes(shows).await
    }

    pub async fn get_show(&self, id: Uuid) -> Result<ShowWithThemes, AppError> {
        let show = sqlx::query_as::<_, AstronomyShow>("SELECT * FROM astronomy_shows WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Astronomy show {id} does not exist")))?;

        let mut with_themes = self.attach_themes(vec![show]).await?;
        Ok(with_themes.remove(0))
    }

    /// Record the poster URI handed back by the media store.
    pub async fn set_show_image(&self, id: Uuid, image_uri: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE astronomy_shows SET image = $2, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .bind(image_uri)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Astronomy show {id} does not exist"
            )));
        }

        Ok(())
    }

    async fn attach_themes(
        &self,
        shows: Vec<AstronomyShow>,
    ) -> Result<Vec<ShowWithThemes>, AppError> {
        let show_ids: Vec<Uuid> = shows.iter().map(|show| show.id).collect();

        let links = sqlx::query_as::<_, ThemeLink>(
            r#"
            SELECT st.astronomy_show_id, t.*
            FROM show_themes t
            JOIN astronomy_show_themes st ON st.show_theme_id = t.id
            WHERE st.astronomy_show_id = ANY($1)
            ORDER BY t.name, t.id
            "#,
        )
        .bind(&show_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_show: HashMap<Uuid, Vec<ShowTheme>> = HashMap::new();
        for link in links {
            by_show
                .entry(link.astronomy_show_id)
                .or_default()
                .push(link.theme);
        }

        Ok(shows
            .into_iter()
            .map(|show| {
                let themes = by_show.remove(&show.id).unwrap_or_default();
                ShowWithThemes { show, themes }
            })
            .collect())
    }
}
