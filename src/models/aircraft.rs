use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Aircraft {
    pub id: i64,
    pub model: String,
    pub capacity: i64,
    pub code: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AircraftRequest {
    pub model: String,
    pub capacity: i64,
    pub code: String,
}
