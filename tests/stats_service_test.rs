use airline_management_system::{
    models::payment::PaymentRequest,
    models::ticket::TicketRequest,
    services::{
        payment_service::PaymentService, stats_service::StatsService, ticket_service::TicketService,
    },
    utils::error::AppError,
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use test_context::{test_context, AsyncTestContext};

mod common {
    pub mod test_utils;
}
use common::test_utils::{seed_flight, seed_passenger, TestDb};

struct StatsContext {
    pool: SqlitePool,
    stats_service: StatsService,
    ticket_service: TicketService,
    payment_service: PaymentService,
}

#[async_trait]
impl AsyncTestContext for StatsContext {
    async fn setup() -> Self {
        let pool = TestDb::get_instance()
            .await
            .expect("Failed to get test database instance");

        StatsContext {
            stats_service: StatsService::new(pool.clone()),
            ticket_service: TicketService::new(pool.clone()),
            payment_service: PaymentService::new(pool.clone()),
            pool,
        }
    }

    async fn teardown(self) {
        self.pool.close().await;
    }
}

#[test_context(StatsContext)]
#[tokio::test]
async fn test_empty_store_reports_all_zeros(ctx: &StatsContext) -> Result<(), AppError> {
    let stats = ctx.stats_service.snapshot().await?;
    assert_eq!(stats.total_flights, 0);
    assert_eq!(stats.total_passengers, 0);
    assert_eq!(stats.total_aircraft, 0);
    assert_eq!(stats.total_tickets, 0);
    assert_eq!(stats.total_revenue, 0.0);
    assert_eq!(stats.paid_tickets, 0);
    assert_eq!(stats.refunded_tickets, 0);
    Ok(())
}

#[test_context(StatsContext)]
#[tokio::test]
async fn test_stats_serialize_with_camel_case_keys(ctx: &StatsContext) -> Result<(), AppError> {
    let stats = ctx.stats_service.snapshot().await?;
    let json = serde_json::to_value(&stats).expect("stats must serialize");
    for key in [
        "totalFlights",
        "totalPassengers",
        "totalAircraft",
        "totalTickets",
        "totalRevenue",
        "paidTickets",
        "refundedTickets",
    ] {
        assert!(json.get(key).is_some(), "missing key {}", key);
    }
    Ok(())
}

// The booking flow end to end: route, flight, passenger, ticket, payment,
// then the ticket view and the dashboard must agree
#[test_context(StatsContext)]
#[tokio::test]
async fn test_end_to_end_booking_scenario(ctx: &StatsContext) -> Result<(), AppError> {
    let seeded = seed_flight(&ctx.pool).await?;
    let passenger_id = seed_passenger(&ctx.pool, "Elif Kaya", "12345678901").await?;

    let ticket_id = ctx
        .ticket_service
        .create_ticket(TicketRequest {
            flight_id: seeded.flight_id,
            passenger_id,
            seat: "12A".to_string(),
            price: Some(500.0),
        })
        .await?;

    let payment_id = ctx
        .payment_service
        .create_payment(PaymentRequest {
            ticket_id,
            method: "card".to_string(),
        })
        .await?;
    let payment = ctx.payment_service.get_payment(payment_id).await?;
    assert_eq!(payment.amount, 500.0);

    let tickets = ctx.ticket_service.list_tickets().await?;
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].id, ticket_id);
    assert_eq!(tickets[0].status, "paid");

    let stats = ctx.stats_service.snapshot().await?;
    assert_eq!(stats.total_flights, 1);
    assert_eq!(stats.total_passengers, 1);
    assert_eq!(stats.total_aircraft, 1);
    assert_eq!(stats.total_tickets, 1);
    assert_eq!(stats.total_revenue, 500.0);
    assert_eq!(stats.paid_tickets, 1);
    assert_eq!(stats.refunded_tickets, 0);
    Ok(())
}

#[test_context(StatsContext)]
#[tokio::test]
async fn test_refund_reduces_revenue_but_not_refund_counter(
    ctx: &StatsContext,
) -> Result<(), AppError> {
    let seeded = seed_flight(&ctx.pool).await?;
    let passenger_id = seed_passenger(&ctx.pool, "Elif Kaya", "12345678901").await?;
    let ticket_id = ctx
        .ticket_service
        .create_ticket(TicketRequest {
            flight_id: seeded.flight_id,
            passenger_id,
            seat: "12A".to_string(),
            price: Some(500.0),
        })
        .await?;
    let payment_id = ctx
        .payment_service
        .create_payment(PaymentRequest {
            ticket_id,
            method: "card".to_string(),
        })
        .await?;

    ctx.payment_service.delete_payment(payment_id).await?;

    let stats = ctx.stats_service.snapshot().await?;
    assert_eq!(stats.total_tickets, 1);
    assert_eq!(stats.total_revenue, 0.0);
    assert_eq!(stats.paid_tickets, 0);
    // no refund tracking exists; the counter never moves
    assert_eq!(stats.refunded_tickets, 0);
    Ok(())
}
