use airline_management_system::db::{self, Database};
use airline_management_system::routes;
use airline_management_system::services::aircraft_service::AircraftService;
use airline_management_system::services::airport_service::AirportService;
use airline_management_system::services::auth_service::AuthService;
use airline_management_system::services::flight_service::FlightService;
use airline_management_system::services::passenger_service::PassengerService;
use airline_management_system::services::payment_service::PaymentService;
use airline_management_system::services::pilot_service::PilotService;
use airline_management_system::services::stats_service::StatsService;
use airline_management_system::services::ticket_service::TicketService;
use airline_management_system::swagger::swagger_ui;

use dotenv::dotenv;
use rocket::fairing::AdHoc;
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::make_swagger_ui;

#[rocket::launch]
async fn rocket() -> _ {
    dotenv().ok();

    // Single SQLite store file; created on first run
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://airline.db".to_string());
    let database = Database::new(&database_url)
        .await
        .expect("Failed to connect to database");
    db::init_schema(database.get_pool())
        .await
        .expect("Failed to initialize schema");
    log::info!("store ready at {}", database_url);

    let pool = database.get_pool().clone();

    rocket::build()
        .manage(AirportService::new(pool.clone()))
        .manage(AircraftService::new(pool.clone()))
        .manage(PilotService::new(pool.clone()))
        .manage(FlightService::new(pool.clone()))
        .manage(PassengerService::new(pool.clone()))
        .manage(TicketService::new(pool.clone()))
        .manage(PaymentService::new(pool.clone()))
        .manage(StatsService::new(pool.clone()))
        .manage(AuthService::new(pool))
        .mount(
            "/api",
            openapi_get_routes![
                routes::flight_route::list_flights,
                routes::flight_route::get_flight,
                routes::flight_route::create_flight,
                routes::flight_route::update_flight,
                routes::flight_route::delete_flight,
                routes::passenger_route::list_passengers,
                routes::passenger_route::get_passenger,
                routes::passenger_route::create_passenger,
                routes::passenger_route::update_passenger,
                routes::passenger_route::delete_passenger,
                routes::aircraft_route::list_aircraft,
                routes::aircraft_route::get_aircraft,
                routes::aircraft_route::create_aircraft,
                routes::aircraft_route::update_aircraft,
                routes::aircraft_route::delete_aircraft,
                routes::pilot_route::list_pilots,
                routes::airport_route::list_airports,
                routes::ticket_route::list_tickets,
                routes::ticket_route::create_ticket,
                routes::ticket_route::cancel_ticket,
                routes::ticket_route::list_reservations,
                routes::payment_route::list_payments,
                routes::payment_route::create_payment,
                routes::payment_route::delete_payment,
                routes::stats_route::get_stats,
                routes::auth_route::login,
                routes::auth_route::logout,
            ],
        )
        .mount("/swagger", make_swagger_ui(&swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
