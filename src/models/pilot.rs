use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Pilot {
    pub id: i64,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PilotRequest {
    pub name: String,
    pub role: String,
}
