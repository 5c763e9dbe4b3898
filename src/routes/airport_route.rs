use crate::models::airport::Airport;
use crate::services::airport_service::AirportService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// List airports
#[openapi(tag = "Airports")]
#[get("/airports")]
pub async fn list_airports(
    airport_service: &State<AirportService>,
) -> Result<Json<Vec<Airport>>, AppError> {
    let airports = airport_service.list_airports().await?;
    Ok(Json(airports))
}
