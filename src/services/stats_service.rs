use crate::models::stats::DashboardStats;
use crate::utils::error::AppResult;
use sqlx::SqlitePool;

pub struct StatsService {
    pool: SqlitePool,
}

impl StatsService {
    pub fn new(pool: SqlitePool) -> Self {
        StatsService { pool }
    }

    // Dashboard counters, read fresh from the store on every call.
    // An empty store is not an error: everything reports zero.
    // Paid tickets equal the payment count because each payment maps to
    // exactly one ticket.
    pub async fn snapshot(&self) -> AppResult<DashboardStats> {
        let total_flights = self.count("SELECT COUNT(*) FROM flights").await?;
        let total_passengers = self.count("SELECT COUNT(*) FROM passengers").await?;
        let total_aircraft = self.count("SELECT COUNT(*) FROM aircraft").await?;
        let total_tickets = self.count("SELECT COUNT(*) FROM tickets").await?;
        let paid_tickets = self.count("SELECT COUNT(*) FROM payments").await?;

        let total_revenue: f64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM payments")
                .fetch_one(&self.pool)
                .await?;

        Ok(DashboardStats {
            total_flights,
            total_passengers,
            total_aircraft,
            total_tickets,
            total_revenue,
            paid_tickets,
            // no refund tracking exists yet
            refunded_tickets: 0,
        })
    }

    async fn count(&self, sql: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}
