use crate::models::flight::{FlightDetail, FlightRequest};
use crate::models::CreatedResponse;
use crate::services::flight_service::FlightService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// List flights enriched with route, aircraft and pilot details
#[openapi(tag = "Flights")]
#[get("/flights")]
pub async fn list_flights(
    flight_service: &State<FlightService>,
) -> Result<Json<Vec<FlightDetail>>, AppError> {
    let flights = flight_service.list_flights().await?;
    Ok(Json(flights))
}

/// Get a single flight
#[openapi(tag = "Flights")]
#[get("/flights/<id>")]
pub async fn get_flight(
    id: i64,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightDetail>, AppError> {
    let flight = flight_service.get_flight(id).await?;
    Ok(Json(flight))
}

/// Create a flight
#[openapi(tag = "Flights")]
#[post("/flights", format = "json", data = "<request>")]
pub async fn create_flight(
    request: Json<FlightRequest>,
    flight_service: &State<FlightService>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = flight_service.create_flight(request.into_inner()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Update a flight
#[openapi(tag = "Flights")]
#[put("/flights/<id>", format = "json", data = "<request>")]
pub async fn update_flight(
    id: i64,
    request: Json<FlightRequest>,
    flight_service: &State<FlightService>,
) -> Result<Json<Value>, AppError> {
    flight_service.update_flight(id, request.into_inner()).await?;
    Ok(Json(json!({ "status": "updated" })))
}

/// Delete a flight (refused while tickets reference it)
#[openapi(tag = "Flights")]
#[delete("/flights/<id>")]
pub async fn delete_flight(
    id: i64,
    flight_service: &State<FlightService>,
) -> Result<Json<Value>, AppError> {
    flight_service.delete_flight(id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
