#![allow(dead_code)]

use airline_management_system::db;
use airline_management_system::models::aircraft::AircraftRequest;
use airline_management_system::models::airport::AirportRequest;
use airline_management_system::models::flight::FlightRequest;
use airline_management_system::models::passenger::PassengerRequest;
use airline_management_system::models::pilot::PilotRequest;
use airline_management_system::services::aircraft_service::AircraftService;
use airline_management_system::services::airport_service::AirportService;
use airline_management_system::services::flight_service::FlightService;
use airline_management_system::services::passenger_service::PassengerService;
use airline_management_system::services::pilot_service::PilotService;
use airline_management_system::utils::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub struct TestDb;

impl TestDb {
    // Fresh in-memory store per test. A single never-expiring connection
    // keeps every statement on the same in-memory database.
    pub async fn get_instance() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false))
            .await?;

        db::init_schema(&pool).await?;
        Ok(pool)
    }
}

pub fn airport_request(name: &str, city: &str, code: &str) -> AirportRequest {
    AirportRequest {
        name: name.to_string(),
        city: city.to_string(),
        country: "Turkey".to_string(),
        code: code.to_string(),
    }
}

pub fn aircraft_request(model: &str, capacity: i64, code: &str) -> AircraftRequest {
    AircraftRequest {
        model: model.to_string(),
        capacity,
        code: code.to_string(),
    }
}

pub fn pilot_request(name: &str, role: &str) -> PilotRequest {
    PilotRequest {
        name: name.to_string(),
        role: role.to_string(),
    }
}

pub fn passenger_request(name: &str, national_id: &str) -> PassengerRequest {
    PassengerRequest {
        name: name.to_string(),
        national_id: national_id.to_string(),
        email: format!("{}@example.com", national_id),
        phone: "+90 555 000 0000".to_string(),
        gender: "female".to_string(),
        age: 34,
    }
}

pub fn flight_request(
    code: &str,
    date: NaiveDate,
    aircraft_id: i64,
    pilot_id: i64,
    departure_id: i64,
    arrival_id: i64,
) -> FlightRequest {
    FlightRequest {
        code: code.to_string(),
        date,
        time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        duration: "1h 15m".to_string(),
        aircraft_id,
        pilot_id,
        departure_id,
        arrival_id,
    }
}

pub struct SeededFlight {
    pub departure_id: i64,
    pub arrival_id: i64,
    pub aircraft_id: i64,
    pub pilot_id: i64,
    pub flight_id: i64,
}

// Istanbul -> Ankara with one aircraft and one pilot, the baseline most
// write-path tests build on
pub async fn seed_flight(pool: &SqlitePool) -> Result<SeededFlight, AppError> {
    let airport_service = AirportService::new(pool.clone());
    let aircraft_service = AircraftService::new(pool.clone());
    let pilot_service = PilotService::new(pool.clone());
    let flight_service = FlightService::new(pool.clone());

    let departure_id = airport_service
        .create_airport(airport_request("Istanbul Airport", "Istanbul", "IST"))
        .await?;
    let arrival_id = airport_service
        .create_airport(airport_request("Esenboga Airport", "Ankara", "ESB"))
        .await?;
    let aircraft_id = aircraft_service
        .create_aircraft(aircraft_request("A320", 180, "TC-JPA"))
        .await?;
    let pilot_id = pilot_service
        .create_pilot(pilot_request("Ada Yilmaz", "captain"))
        .await?;

    let flight_id = flight_service
        .create_flight(flight_request(
            "TK101",
            NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
            aircraft_id,
            pilot_id,
            departure_id,
            arrival_id,
        ))
        .await?;

    Ok(SeededFlight {
        departure_id,
        arrival_id,
        aircraft_id,
        pilot_id,
        flight_id,
    })
}

pub async fn seed_passenger(pool: &SqlitePool, name: &str, national_id: &str) -> Result<i64, AppError> {
    PassengerService::new(pool.clone())
        .create_passenger(passenger_request(name, national_id))
        .await
}
