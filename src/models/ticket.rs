use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Ticket {
    pub id: i64,
    pub flight_id: i64,
    pub passenger_id: i64,
    pub seat: String,
    pub price: f64,
    pub purchase_date: NaiveDateTime,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TicketRequest {
    pub flight_id: i64,
    pub passenger_id: i64,
    pub seat: String,
    // Falls back to the standard fare when omitted
    pub price: Option<f64>,
}

// Ticket listing view: passenger name and flight code joined in, with the
// payment status derived from payment-row existence ("paid" / "pending")
#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct TicketDetail {
    pub id: i64,
    pub flight_id: i64,
    pub passenger_id: i64,
    pub seat: String,
    pub price: f64,
    pub purchase_date: NaiveDateTime,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
    pub status: String,
}

// Fully enriched reservation view: ticket + passenger + flight + route
#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct ReservationDetail {
    pub id: i64,
    pub flight_id: i64,
    pub passenger_id: i64,
    pub seat: String,
    pub price: f64,
    pub purchase_date: NaiveDateTime,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
    pub flight_date: Option<NaiveDate>,
    pub flight_time: Option<NaiveTime>,
    pub from_city: Option<String>,
    pub to_city: Option<String>,
    pub status: String,
}
