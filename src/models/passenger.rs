use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Passenger {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PassengerRequest {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: i64,
}

// Passenger row plus the number of tickets held, for the listing view
#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct PassengerSummary {
    pub id: i64,
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: i64,
    pub reservations: i64,
}
