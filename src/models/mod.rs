pub mod aircraft;
pub mod airport;
pub mod auth;
pub mod flight;
pub mod passenger;
pub mod payment;
pub mod pilot;
pub mod stats;
pub mod ticket;

use schemars::JsonSchema;
use serde::Serialize;

// Response body for every create endpoint
#[derive(Debug, Serialize, JsonSchema)]
pub struct CreatedResponse {
    pub id: i64,
}
