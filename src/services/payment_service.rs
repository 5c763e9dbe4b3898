use crate::models::payment::{Payment, PaymentDetail, PaymentRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use chrono::Local;
use sqlx::SqlitePool;

pub struct PaymentService {
    pool: SqlitePool,
}

impl PaymentService {
    pub fn new(pool: SqlitePool) -> Self {
        PaymentService { pool }
    }

    // List payments with passenger name and flight code reached through the
    // ticket; dangling hops surface as NULL fields
    pub async fn list_payments(&self) -> AppResult<Vec<PaymentDetail>> {
        let payments = sqlx::query_as::<_, PaymentDetail>(
            r#"
            SELECT
                o.id,
                o.ticket_id,
                o.method,
                o.amount,
                o.payment_date,
                y.name AS passenger_name,
                f.code AS flight_code
            FROM payments o
            LEFT JOIN tickets t ON o.ticket_id = t.id
            LEFT JOIN passengers y ON t.passenger_id = y.id
            LEFT JOIN flights f ON t.flight_id = f.id
            ORDER BY o.payment_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    pub async fn get_payment(&self, id: i64) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "SELECT id, ticket_id, method, amount, payment_date FROM payments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".into()))
    }

    // Take a payment for a ticket. The amount is copied from the ticket's
    // stored price inside the same transaction; callers cannot set it, so
    // payment and ticket can never disagree on the fare. One payment per
    // ticket, backed by the UNIQUE constraint on ticket_id.
    pub async fn create_payment(&self, request: PaymentRequest) -> AppResult<i64> {
        require_field(&request.method, "method")?;

        let mut tx = self.pool.begin().await?;

        let price: Option<f64> = sqlx::query_scalar("SELECT price FROM tickets WHERE id = ?")
            .bind(request.ticket_id)
            .fetch_optional(&mut *tx)
            .await?;
        let price = price.ok_or_else(|| AppError::NotFound("Ticket not found".into()))?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM payments WHERE ticket_id = ?")
            .bind(request.ticket_id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("Ticket is already paid".into()));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO payments (ticket_id, method, amount, payment_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(request.ticket_id)
        .bind(&request.method)
        .bind(price)
        .bind(Local::now().naive_local())
        .execute(&mut *tx)
        .await?;

        let payment_id = result.last_insert_rowid();
        tx.commit().await?;

        log::info!("payment {} taken for ticket {}", payment_id, request.ticket_id);
        Ok(payment_id)
    }

    // Refund: removes the payment row only. The ticket reverts to
    // "pending"; no refund counter exists to increment. Idempotent.
    pub async fn delete_payment(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM payments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
