use crate::models::aircraft::{Aircraft, AircraftRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use sqlx::SqlitePool;

pub struct AircraftService {
    pool: SqlitePool,
}

impl AircraftService {
    pub fn new(pool: SqlitePool) -> Self {
        AircraftService { pool }
    }

    // List aircraft ordered by model
    pub async fn list_aircraft(&self) -> AppResult<Vec<Aircraft>> {
        let aircraft = sqlx::query_as::<_, Aircraft>(
            r#"
            SELECT id, model, capacity, code
            FROM aircraft
            ORDER BY model
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(aircraft)
    }

    pub async fn get_aircraft(&self, id: i64) -> AppResult<Aircraft> {
        sqlx::query_as::<_, Aircraft>("SELECT id, model, capacity, code FROM aircraft WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Aircraft not found".into()))
    }

    pub async fn create_aircraft(&self, request: AircraftRequest) -> AppResult<i64> {
        require_field(&request.model, "model")?;
        require_field(&request.code, "code")?;
        if request.capacity <= 0 {
            return Err(AppError::ValidationError("capacity must be positive".into()));
        }

        let result = sqlx::query("INSERT INTO aircraft (model, capacity, code) VALUES (?, ?, ?)")
            .bind(&request.model)
            .bind(request.capacity)
            .bind(&request.code)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_aircraft(&self, id: i64, request: AircraftRequest) -> AppResult<()> {
        require_field(&request.model, "model")?;
        require_field(&request.code, "code")?;
        if request.capacity <= 0 {
            return Err(AppError::ValidationError("capacity must be positive".into()));
        }

        let result = sqlx::query("UPDATE aircraft SET model = ?, capacity = ?, code = ? WHERE id = ?")
            .bind(&request.model)
            .bind(request.capacity)
            .bind(&request.code)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Aircraft not found".into()));
        }
        Ok(())
    }

    // Idempotent, and deliberately unguarded: a flight may be left pointing
    // at a deleted aircraft, and the flight views tolerate that.
    pub async fn delete_aircraft(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM aircraft WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
