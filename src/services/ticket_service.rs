use crate::models::ticket::{ReservationDetail, TicketDetail, TicketRequest};
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::require_field;
use chrono::Local;
use sqlx::SqlitePool;

// Standard fare applied when the caller does not price the ticket
const DEFAULT_TICKET_PRICE: f64 = 1000.0;

pub struct TicketService {
    pool: SqlitePool,
}

impl TicketService {
    pub fn new(pool: SqlitePool) -> Self {
        TicketService { pool }
    }

    // List tickets with passenger name, flight code and derived status.
    // "paid" means a payment row exists for the ticket, "pending" otherwise;
    // there is no stored status column.
    pub async fn list_tickets(&self) -> AppResult<Vec<TicketDetail>> {
        let tickets = sqlx::query_as::<_, TicketDetail>(
            r#"
            SELECT
                t.id,
                t.flight_id,
                t.passenger_id,
                t.seat,
                t.price,
                t.purchase_date,
                y.name AS passenger_name,
                f.code AS flight_code,
                CASE WHEN o.id IS NOT NULL THEN 'paid' ELSE 'pending' END AS status
            FROM tickets t
            LEFT JOIN passengers y ON t.passenger_id = y.id
            LEFT JOIN flights f ON t.flight_id = f.id
            LEFT JOIN payments o ON o.ticket_id = t.id
            ORDER BY t.purchase_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn get_ticket(&self, id: i64) -> AppResult<TicketDetail> {
        sqlx::query_as::<_, TicketDetail>(
            r#"
            SELECT
                t.id,
                t.flight_id,
                t.passenger_id,
                t.seat,
                t.price,
                t.purchase_date,
                y.name AS passenger_name,
                f.code AS flight_code,
                CASE WHEN o.id IS NOT NULL THEN 'paid' ELSE 'pending' END AS status
            FROM tickets t
            LEFT JOIN passengers y ON t.passenger_id = y.id
            LEFT JOIN flights f ON t.flight_id = f.id
            LEFT JOIN payments o ON o.ticket_id = t.id
            WHERE t.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".into()))
    }

    // Book a ticket. The referenced flight and passenger must exist; the
    // check and the insert share one transaction so the references cannot
    // go dangling between them.
    pub async fn create_ticket(&self, request: TicketRequest) -> AppResult<i64> {
        require_field(&request.seat, "seat")?;
        let price = request.price.unwrap_or(DEFAULT_TICKET_PRICE);
        if price < 0.0 {
            return Err(AppError::ValidationError("price must not be negative".into()));
        }

        let mut tx = self.pool.begin().await?;

        let flight: Option<i64> = sqlx::query_scalar("SELECT 1 FROM flights WHERE id = ?")
            .bind(request.flight_id)
            .fetch_optional(&mut *tx)
            .await?;
        if flight.is_none() {
            return Err(AppError::Conflict(
                "Ticket references a flight that does not exist".into(),
            ));
        }

        let passenger: Option<i64> = sqlx::query_scalar("SELECT 1 FROM passengers WHERE id = ?")
            .bind(request.passenger_id)
            .fetch_optional(&mut *tx)
            .await?;
        if passenger.is_none() {
            return Err(AppError::Conflict(
                "Ticket references a passenger that does not exist".into(),
            ));
        }

        let result = sqlx::query(
            r#"
            INSERT INTO tickets (flight_id, passenger_id, seat, price, purchase_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(request.flight_id)
        .bind(request.passenger_id)
        .bind(&request.seat)
        .bind(price)
        .bind(Local::now().naive_local())
        .execute(&mut *tx)
        .await?;

        let ticket_id = result.last_insert_rowid();
        tx.commit().await?;

        log::info!("ticket {} booked on flight {}", ticket_id, request.flight_id);
        Ok(ticket_id)
    }

    // Cancel a reservation: the payment (if any) goes first, then the
    // ticket, inside one transaction. The other order could expose a
    // payment pointing at a ticket that is already gone.
    // Idempotent when the ticket does not exist.
    pub async fn cancel_ticket(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM payments WHERE ticket_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    // Reservation view: ticket + passenger + flight + both route cities.
    // Every hop is a LEFT JOIN, so a broken reference anywhere degrades to
    // NULL fields rather than dropping the row.
    pub async fn list_reservations(&self) -> AppResult<Vec<ReservationDetail>> {
        let reservations = sqlx::query_as::<_, ReservationDetail>(
            r#"
            SELECT
                t.id,
                t.flight_id,
                t.passenger_id,
                t.seat,
                t.price,
                t.purchase_date,
                y.name AS passenger_name,
                f.code AS flight_code,
                f.date AS flight_date,
                f.time AS flight_time,
                dep.city AS from_city,
                arr.city AS to_city,
                CASE WHEN o.id IS NOT NULL THEN 'paid' ELSE 'pending' END AS status
            FROM tickets t
            LEFT JOIN passengers y ON t.passenger_id = y.id
            LEFT JOIN flights f ON t.flight_id = f.id
            LEFT JOIN airports dep ON f.departure_id = dep.id
            LEFT JOIN airports arr ON f.arrival_id = arr.id
            LEFT JOIN payments o ON o.ticket_id = t.id
            ORDER BY t.purchase_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations)
    }
}
