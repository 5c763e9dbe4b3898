pub mod aircraft_service;
pub mod airport_service;
pub mod auth_service;
pub mod flight_service;
pub mod passenger_service;
pub mod payment_service;
pub mod pilot_service;
pub mod stats_service;
pub mod ticket_service;
