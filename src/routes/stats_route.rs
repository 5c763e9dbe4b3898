use crate::models::stats::DashboardStats;
use crate::services::stats_service::StatsService;
use crate::utils::error::AppError;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Dashboard aggregate snapshot
#[openapi(tag = "Stats")]
#[get("/stats")]
pub async fn get_stats(
    stats_service: &State<StatsService>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = stats_service.snapshot().await?;
    Ok(Json(stats))
}
