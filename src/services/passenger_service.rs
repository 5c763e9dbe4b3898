use crate::models::passenger::{Passenger, PassengerRequest, PassengerSummary};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use sqlx::SqlitePool;

pub struct PassengerService {
    pool: SqlitePool,
}

impl PassengerService {
    pub fn new(pool: SqlitePool) -> Self {
        PassengerService { pool }
    }

    // List passengers by name, each with the number of tickets held
    pub async fn list_passengers(&self) -> AppResult<Vec<PassengerSummary>> {
        let passengers = sqlx::query_as::<_, PassengerSummary>(
            r#"
            SELECT
                y.id,
                y.name,
                y.national_id,
                y.email,
                y.phone,
                y.gender,
                y.age,
                (SELECT COUNT(*) FROM tickets WHERE passenger_id = y.id) AS reservations
            FROM passengers y
            ORDER BY y.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(passengers)
    }

    pub async fn get_passenger(&self, id: i64) -> AppResult<Passenger> {
        sqlx::query_as::<_, Passenger>(
            "SELECT id, name, national_id, email, phone, gender, age FROM passengers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Passenger not found".into()))
    }

    pub async fn create_passenger(&self, request: PassengerRequest) -> AppResult<i64> {
        self.validate_passenger(&request)?;

        let result = sqlx::query(
            r#"
            INSERT INTO passengers (name, national_id, email, phone, gender, age)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.name)
        .bind(&request.national_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.gender)
        .bind(request.age)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_passenger(&self, id: i64, request: PassengerRequest) -> AppResult<()> {
        self.validate_passenger(&request)?;

        let result = sqlx::query(
            r#"
            UPDATE passengers
            SET name = ?, national_id = ?, email = ?, phone = ?, gender = ?, age = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.name)
        .bind(&request.national_id)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.gender)
        .bind(request.age)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Passenger not found".into()));
        }
        Ok(())
    }

    pub async fn delete_passenger(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM passengers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn validate_passenger(&self, request: &PassengerRequest) -> AppResult<()> {
        require_field(&request.name, "name")?;
        require_field(&request.national_id, "national_id")?;
        require_field(&request.email, "email")?;
        if request.age < 0 {
            return Err(AppError::ValidationError("age must not be negative".into()));
        }
        Ok(())
    }
}
