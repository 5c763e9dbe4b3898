pub mod aircraft_route;
pub mod airport_route;
pub mod auth_route;
pub mod flight_route;
pub mod passenger_route;
pub mod payment_route;
pub mod pilot_route;
pub mod stats_route;
pub mod ticket_route;
