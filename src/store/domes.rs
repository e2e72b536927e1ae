use uuid::Uuid;

use crate::models::dome::{self, PlanetariumDome};
use crate::store::Store;
use crate::utils::error::AppError;

const NAME_MAX_LEN: usize = 64;

impl Store {
    pub async fn create_dome(
        &self,
        name: &str,
        rows: i32,
        seats_in_row: i32,
    ) -> Result<PlanetariumDome, AppError> {
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

        dome::validate_dimensions(rows, seats_in_row)?;

        let dome = sqlx::query_as::<_, PlanetariumDome>(
            r#"
            INSERT INTO planetarium_domes (name, "rows", seats_in_row)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(rows)
        .bind(seats_in_row)
        .fetch_one(&self.pool)
        .await?;

        Ok(dome)
    }

    pub async fn list_domes(&self) -> Result<Vec<PlanetariumDome>, AppError> {
        let domes = sqlx::query_as::<_, PlanetariumDome>(
            "SELECT * FROM planetarium_domes ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(domes)
    }

    pub async fn get_dome(&self, id: Uuid) -> Result<PlanetariumDome, AppError> {
        sqlx::query_as::<_, PlanetariumDome>("SELECT * FROM planetarium_domes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Planetarium dome {id} does not exist")))
    }
}
