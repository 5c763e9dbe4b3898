use crate::models::pilot::{Pilot, PilotRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use sqlx::SqlitePool;

pub struct PilotService {
    pool: SqlitePool,
}

impl PilotService {
    pub fn new(pool: SqlitePool) -> Self {
        PilotService { pool }
    }

    // List pilots ordered by name
    pub async fn list_pilots(&self) -> AppResult<Vec<Pilot>> {
        let pilots = sqlx::query_as::<_, Pilot>(
            r#"
            SELECT id, name, role
            FROM pilots
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(pilots)
    }

    pub async fn get_pilot(&self, id: i64) -> AppResult<Pilot> {
        sqlx::query_as::<_, Pilot>("SELECT id, name, role FROM pilots WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Pilot not found".into()))
    }

    pub async fn create_pilot(&self, request: PilotRequest) -> AppResult<i64> {
        require_field(&request.name, "name")?;
        require_field(&request.role, "role")?;

        let result = sqlx::query("INSERT INTO pilots (name, role) VALUES (?, ?)")
            .bind(&request.name)
            .bind(&request.role)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_pilot(&self, id: i64, request: PilotRequest) -> AppResult<()> {
        require_field(&request.name, "name")?;
        require_field(&request.role, "role")?;

        let result = sqlx::query("UPDATE pilots SET name = ?, role = ? WHERE id = ?")
            .bind(&request.name)
            .bind(&request.role)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Pilot not found".into()));
        }
        Ok(())
    }

    pub async fn delete_pilot(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM pilots WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
