use crate::models::airport::{Airport, AirportRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use sqlx::SqlitePool;

pub struct AirportService {
    pool: SqlitePool,
}

impl AirportService {
    pub fn new(pool: SqlitePool) -> Self {
        AirportService { pool }
    }

    // List airports ordered by city
    pub async fn list_airports(&self) -> AppResult<Vec<Airport>> {
        let airports = sqlx::query_as::<_, Airport>(
            r#"
            SELECT id, name, city, country, code
            FROM airports
            ORDER BY city
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(airports)
    }

    pub async fn get_airport(&self, id: i64) -> AppResult<Airport> {
        sqlx::query_as::<_, Airport>(
            "SELECT id, name, city, country, code FROM airports WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Airport not found".into()))
    }

    pub async fn create_airport(&self, request: AirportRequest) -> AppResult<i64> {
        require_field(&request.name, "name")?;
        require_field(&request.city, "city")?;
        require_field(&request.country, "country")?;
        require_field(&request.code, "code")?;

        let result = sqlx::query(
            "INSERT INTO airports (name, city, country, code) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.city)
        .bind(&request.country)
        .bind(&request.code)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_airport(&self, id: i64, request: AirportRequest) -> AppResult<()> {
        require_field(&request.name, "name")?;
        require_field(&request.city, "city")?;
        require_field(&request.country, "country")?;
        require_field(&request.code, "code")?;

        let result = sqlx::query(
            "UPDATE airports SET name = ?, city = ?, country = ?, code = ? WHERE id = ?",
        )
        .bind(&request.name)
        .bind(&request.city)
        .bind(&request.country)
        .bind(&request.code)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Airport not found".into()));
        }
        Ok(())
    }

    // Idempotent: deleting an unknown id is not an error
    pub async fn delete_airport(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM airports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
