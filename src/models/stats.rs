use schemars::JsonSchema;
use serde::Serialize;

// Dashboard snapshot, always computed from current store state.
// refunded_tickets stays 0: there is no refund tracking yet.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_flights: i64,
    pub total_passengers: i64,
    pub total_aircraft: i64,
    pub total_tickets: i64,
    pub total_revenue: f64,
    pub paid_tickets: i64,
    pub refunded_tickets: i64,
}
