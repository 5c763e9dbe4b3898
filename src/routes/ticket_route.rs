use crate::models::ticket::{ReservationDetail, TicketDetail, TicketRequest};
use crate::models::CreatedResponse;
use crate::services::ticket_service::TicketService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// List tickets with passenger, flight and paid/pending status
#[openapi(tag = "Tickets")]
#[get("/tickets")]
pub async fn list_tickets(
    ticket_service: &State<TicketService>,
) -> Result<Json<Vec<TicketDetail>>, AppError> {
    let tickets = ticket_service.list_tickets().await?;
    Ok(Json(tickets))
}

/// Book a ticket
#[openapi(tag = "Tickets")]
#[post("/tickets", format = "json", data = "<request>")]
pub async fn create_ticket(
    request: Json<TicketRequest>,
    ticket_service: &State<TicketService>,
) -> Result<Json<CreatedResponse>, AppError> {
    let id = ticket_service.create_ticket(request.into_inner()).await?;
    Ok(Json(CreatedResponse { id }))
}

/// Cancel a reservation: removes the ticket and its payment, if any
#[openapi(tag = "Tickets")]
#[delete("/tickets/<id>")]
pub async fn cancel_ticket(
    id: i64,
    ticket_service: &State<TicketService>,
) -> Result<Json<Value>, AppError> {
    ticket_service.cancel_ticket(id).await?;
    Ok(Json(json!({ "status": "cancelled" })))
}

/// List reservations (fully enriched ticket view)
#[openapi(tag = "Reservations")]
#[get("/reservations")]
pub async fn list_reservations(
    ticket_service: &State<TicketService>,
) -> Result<Json<Vec<ReservationDetail>>, AppError> {
    let reservations = ticket_service.list_reservations().await?;
    Ok(Json(reservations))
}
