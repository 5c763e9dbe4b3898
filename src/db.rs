use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// Database connection manager
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    // Open (creating if missing) the SQLite store and build a connection pool
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(3))
            .connect_with(options)
            .await?;

        Ok(Database { pool })
    }

    // Get a reference to the connection pool
    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// Foreign keys are declared for documentation but the pragma stays off:
// referential integrity on the write path is enforced in the service layer,
// and deleting a referenced aircraft/pilot/airport must stay possible so the
// joined views can degrade to null fields instead of failing.
const TABLES: [&str; 8] = [
    "CREATE TABLE IF NOT EXISTS airports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        city TEXT NOT NULL,
        country TEXT NOT NULL,
        code TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS aircraft (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        model TEXT NOT NULL,
        capacity INTEGER NOT NULL,
        code TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS pilots (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        role TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS flights (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT NOT NULL,
        date TEXT NOT NULL,
        time TEXT NOT NULL,
        duration TEXT NOT NULL,
        aircraft_id INTEGER NOT NULL REFERENCES aircraft(id),
        pilot_id INTEGER NOT NULL REFERENCES pilots(id),
        departure_id INTEGER NOT NULL REFERENCES airports(id),
        arrival_id INTEGER NOT NULL REFERENCES airports(id)
    )",
    "CREATE TABLE IF NOT EXISTS passengers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        national_id TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        gender TEXT NOT NULL,
        age INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        flight_id INTEGER NOT NULL REFERENCES flights(id),
        passenger_id INTEGER NOT NULL REFERENCES passengers(id),
        seat TEXT NOT NULL,
        price REAL NOT NULL,
        purchase_date TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS payments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        ticket_id INTEGER NOT NULL UNIQUE REFERENCES tickets(id),
        method TEXT NOT NULL,
        amount REAL NOT NULL,
        payment_date TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS login (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )",
];

// Create all tables on startup; safe to call on an existing store
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for create_sql in TABLES {
        sqlx::query(create_sql).execute(pool).await?;
    }
    log::info!("schema initialized ({} tables)", TABLES.len());
    Ok(())
}
