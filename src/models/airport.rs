use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Airport {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub country: String,
    pub code: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AirportRequest {
    pub name: String,
    pub city: String,
    pub country: String,
    pub code: String,
}
