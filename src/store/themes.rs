use crate::models::ShowTheme;
use crate::store::Store;
use crate::utils::error::AppError;

const NAME_MAX_LEN: usize = 64;

impl Store {
    pub async fn create_theme(&self, name: &str) -> Result<ShowTheme, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::field_validation("name", "name must not be blank"));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(AppError::field_validation(
                "name",
                format!("name must be at most {NAME_MAX_LEN} characters"),
            ));
        }

        sqlx::query_as::<_, ShowTheme>(
            "INSERT INTO show_themes (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::field_validation("name", format!("show theme '{name}' already exists"))
            }
            _ => AppError::DatabaseError(e),
        })
    }

    pub async fn list_themes(&self) -> Result<Vec<ShowTheme>, AppError> {
        let themes =
            sqlx::query_as::<_, ShowTheme>("SELECT * FROM show_themes ORDER BY name, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(themes)
    }
}
