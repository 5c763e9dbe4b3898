use crate::models::aircraft::{Aircraft, AircraftRequest};
use crate::models::CreatedResponse;
use crate::services::aircraft_service::AircraftService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// List aircraft
#[openapi(tag = "Aircraft")]
#[get("/aircraft")]
pub async fn list_aircraft(
    aircraft_service: &State<AircraftService>,
) -> Result<Json<Vec<Aircraft>>, AppError> {
    let aircraft = aircraft_service.list_aircraft().await?;
    Ok(Json(aircraft))
}

/// Get a single aircraft
#[openapi(tag = "Aircraft")]
#[get("/aircraft/<id>")]
pub async fn get_aircraft(
    id: i64,
    aircraft_service: &State<AircraftService>,
) -> Result<Json<Aircraft>, AppError> {
    let aircraft = aircraft_service.get_aircraft(id).await?;
    Ok(Json(aircraft))
}

/// Add an aircraft
#[openapi(tag = "Aircraft")]
#[post("/aircraft", format = "json", data = "<request>")]
pub async fn create_aircraft(
    request: Json<AircraftRequest>,
    aircraft_service: &State<AircraftService>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = aircraft_service.create_aircraft(request.into_inner()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Update an aircraft
#[openapi(tag = "Aircraft")]
#[put("/aircraft/<id>", format = "json", data = "<request>")]
pub async fn update_aircraft(
    id: i64,
    request: Json<AircraftRequest>,
    aircraft_service: &State<AircraftService>,
) -> Result<Json<Value>, AppError> {
    aircraft_service
        .update_aircraft(id, request.into_inner())
        .await?;
    Ok(Json(json!({ "status": "updated" })))
}

/// Delete an aircraft
#[openapi(tag = "Aircraft")]
#[delete("/aircraft/<id>")]
pub async fn delete_aircraft(
    id: i64,
    aircraft_service: &State<AircraftService>,
) -> Result<Json<Value>, AppError> {
    aircraft_service.delete_aircraft(id).await?;
    Ok(Json(json!({ "status": "deleted" })))
}
