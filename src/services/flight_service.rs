use crate::models::flight::{FlightDetail, FlightRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use sqlx::SqlitePool;

const FLIGHT_DETAIL_SELECT: &str = r#"
    SELECT
        f.id,
        f.code,
        f.date,
        f.time,
        f.duration,
        f.aircraft_id,
        f.pilot_id,
        f.departure_id,
        f.arrival_id,
        dep.city AS from_city,
        dep.code AS from_code,
        arr.city AS to_city,
        arr.code AS to_code,
        a.model AS aircraft_model,
        a.code AS aircraft_code,
        p.name AS pilot_name
    FROM flights f
    LEFT JOIN airports dep ON f.departure_id = dep.id
    LEFT JOIN airports arr ON f.arrival_id = arr.id
    LEFT JOIN aircraft a ON f.aircraft_id = a.id
    LEFT JOIN pilots p ON f.pilot_id = p.id
"#;

pub struct FlightService {
    pool: SqlitePool,
}

impl FlightService {
    pub fn new(pool: SqlitePool) -> Self {
        FlightService { pool }
    }

    // List flights enriched with route cities, aircraft and pilot.
    // LEFT JOINs throughout: a flight whose aircraft (or any other related
    // row) was deleted still lists, with those fields as NULL.
    pub async fn list_flights(&self) -> AppResult<Vec<FlightDetail>> {
        let sql = format!("{} ORDER BY f.date DESC, f.time DESC", FLIGHT_DETAIL_SELECT);
        let flights = sqlx::query_as::<_, FlightDetail>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(flights)
    }

    pub async fn get_flight(&self, id: i64) -> AppResult<FlightDetail> {
        let sql = format!("{} WHERE f.id = ?", FLIGHT_DETAIL_SELECT);
        sqlx::query_as::<_, FlightDetail>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Flight not found".into()))
    }

    pub async fn create_flight(&self, request: FlightRequest) -> AppResult<i64> {
        self.validate_flight(&request).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO flights (code, date, time, duration, aircraft_id, pilot_id, departure_id, arrival_id)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.code)
        .bind(request.date)
        .bind(request.time)
        .bind(&request.duration)
        .bind(request.aircraft_id)
        .bind(request.pilot_id)
        .bind(request.departure_id)
        .bind(request.arrival_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn update_flight(&self, id: i64, request: FlightRequest) -> AppResult<()> {
        self.validate_flight(&request).await?;

        let result = sqlx::query(
            r#"
            UPDATE flights
            SET code = ?, date = ?, time = ?, duration = ?,
                aircraft_id = ?, pilot_id = ?, departure_id = ?, arrival_id = ?
            WHERE id = ?
            "#,
        )
        .bind(&request.code)
        .bind(request.date)
        .bind(request.time)
        .bind(&request.duration)
        .bind(request.aircraft_id)
        .bind(request.pilot_id)
        .bind(request.departure_id)
        .bind(request.arrival_id)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Flight not found".into()));
        }
        Ok(())
    }

    // Refused while tickets still reference the flight; otherwise idempotent
    pub async fn delete_flight(&self, id: i64) -> AppResult<()> {
        let ticket_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM tickets WHERE flight_id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if ticket_count > 0 {
            return Err(AppError::Conflict(
                "Flight still has tickets; cancel them first".into(),
            ));
        }

        sqlx::query("DELETE FROM flights WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // Required fields, distinct route endpoints, and all four referenced
    // rows must exist before a flight may be written
    async fn validate_flight(&self, request: &FlightRequest) -> AppResult<()> {
        require_field(&request.code, "code")?;
        require_field(&request.duration, "duration")?;

        if request.departure_id == request.arrival_id {
            return Err(AppError::ValidationError(
                "departure and arrival airports must differ".into(),
            ));
        }

        if !self.row_exists("airports", request.departure_id).await? {
            return Err(AppError::ValidationError(
                "departure airport does not exist".into(),
            ));
        }
        if !self.row_exists("airports", request.arrival_id).await? {
            return Err(AppError::ValidationError(
                "arrival airport does not exist".into(),
            ));
        }
        if !self.row_exists("aircraft", request.aircraft_id).await? {
            return Err(AppError::ValidationError("aircraft does not exist".into()));
        }
        if !self.row_exists("pilots", request.pilot_id).await? {
            return Err(AppError::ValidationError("pilot does not exist".into()));
        }

        Ok(())
    }

    async fn row_exists(&self, table: &str, id: i64) -> AppResult<bool> {
        // table names come from the fixed set above, never from callers
        let sql = format!("SELECT 1 FROM {} WHERE id = ?", table);
        let found: Option<i64> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }
}
