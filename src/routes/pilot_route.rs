use crate::models::pilot::Pilot;
use crate::services::pilot_service::PilotService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// List pilots
#[openapi(tag = "Pilots")]
#[get("/pilots")]
pub async fn list_pilots(
    pilot_service: &State<PilotService>,
) -> Result<Json<Vec<Pilot>>, AppError> {
    let pilots = pilot_service.list_pilots().await?;
    Ok(Json(pilots))
}
