use crate::models::passenger::{Passenger, PassengerRequest, PassengerSummary};
use crate::models::CreatedResponse;
use crate::services::passenger_service::PassengerService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// List passengers with their reservation counts
#[openapi(tag = "Passengers")]
#[get("/passengers")]
pub async fn list_passengers(
    passenger_service: &State<PassengerService>,
) -> Result<Json<Vec<PassengerSummary>>, AppError> {
    let passengers = passenger_service.list_passengers().await?;
    Ok(Json(passengers))
}

/// Get a single passenger
#[openapi(tag = "Passengers")]
#[get("/passengers/<id>")]
pub async fn get_passenger(
    id: i64,
    passenger_service: &State<PassengerService>,
) -> Result<Json<Passenger>, AppError> {
    let passenger = passenger_service.get_passenger(id).await?;
    Ok(Json(passenger))
}

/// Register a passenger
#[openapi(tag = "Passengers")]
#[post("/passengers", format = "json", data = "<request>")]
pub async fn create_passenger(
    request: Json<PassengerRequest>,
    passenger_service: &State<PassengerService>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = passenger_service.create_passenger(request.into_inner()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Update a passenger
#[openapi(tag = "Passengers")]
#[put("/passengers/<id>", format = "json", data = "<request>")]
pub async fn update_passenger(
    id: i64,
    request: Json<PassengerRequest>,
    passenger_service: &State<PassengerService>,
) -> Result<Json<Value>, AppError> {
    passenger_service
        .update_passenger(id, request.into_inner())
        .await?;
    Ok(Json(json!({ "status": "updated" })))
}

/// Delete a passenger
#[openapi(tag = "Passengers")]
#[delete("/passengers/<id>")]
pub async fn delete_passenger(
    id: i64,
    passenger_service: &State<PassengerService>,
) -> Result<Json<Value>, AppError> {
    passenger_service.delete_passenger(id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
