use crate::models::payment::{PaymentDetail, PaymentRequest};
use crate::models::CreatedResponse;
use crate::services::payment_service::PaymentService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// List payments with passenger and flight context
#[openapi(tag = "Payments")]
#[get("/payments")]
pub async fn list_payments(
    payment_service: &State<PaymentService>,
) -> Result<Json<Vec<PaymentDetail>>, AppError> {
    let payments = payment_service.list_payments().await?;
    Ok(Json(payments))
}

/// Take a payment for a ticket; the amount comes from the ticket's price
#[openapi(tag = "Payments")]
#[post("/payments", format = "json", data = "<request>")]
pub async fn create_payment(
    request: Json<PaymentRequest>,
    payment_service: &State<PaymentService>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = payment_service.create_payment(request.into_inner()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Refund a payment
#[openapi(tag = "Payments")]
#[delete("/payments/<id>")]
pub async fn delete_payment(
    id: i64,
    payment_service: &State<PaymentService>,
) -> Result<Json<Value>, AppError> {
    payment_service.delete_payment(id).await?;
    Ok(Json(json!({ "status": "refunded" })))
}
