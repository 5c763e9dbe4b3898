use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Payment {
    pub id: i64,
    pub ticket_id: i64,
    pub method: String,
    pub amount: f64,
    pub payment_date: NaiveDateTime,
}

// The amount is not accepted from the caller: it is copied from the
// ticket's stored price when the payment is created.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PaymentRequest {
    pub ticket_id: i64,
    pub method: String,
}

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct PaymentDetail {
    pub id: i64,
    pub ticket_id: i64,
    pub method: String,
    pub amount: f64,
    pub payment_date: NaiveDateTime,
    pub passenger_name: Option<String>,
    pub flight_code: Option<String>,
}
