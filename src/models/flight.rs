use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct Flight {
    pub id: i64,
    pub code: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: String,
    pub aircraft_id: i64,
    pub pilot_id: i64,
    pub departure_id: i64,
    pub arrival_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct FlightRequest {
    pub code: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: String,
    pub aircraft_id: i64,
    pub pilot_id: i64,
    pub departure_id: i64,
    pub arrival_id: i64,
}

// Flight row enriched with route, aircraft and pilot details.
// The joined fields are Option because a related row may have been
// deleted out from under the flight; the flight itself still lists.
#[derive(Debug, Serialize, sqlx::FromRow, JsonSchema)]
pub struct FlightDetail {
    pub id: i64,
    pub code: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: String,
    pub aircraft_id: i64,
    pub pilot_id: i64,
    pub departure_id: i64,
    pub arrival_id: i64,
    pub from_city: Option<String>,
    pub from_code: Option<String>,
    pub to_city: Option<String>,
    pub to_code: Option<String>,
    pub aircraft_model: Option<String>,
    pub aircraft_code: Option<String>,
    pub pilot_name: Option<String>,
}
