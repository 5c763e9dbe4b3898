use crate::models::auth::{LoginRequest, LoginResponse};
use crate::utils::error::{AppError, AppResult};
use crate::utils::token::session_token;
use crate::utils::validation::require_field;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

pub struct AuthService {
    pool: SqlitePool,
}

impl AuthService {
    pub fn new(pool: SqlitePool) -> Self {
        AuthService { pool }
    }

    // Verify a username/password pair against the login table and issue an
    // opaque session token. The token is not persisted and is not checked
    // on later calls.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        require_field(&request.username, "username")?;
        require_field(&request.password, "password")?;

        let password_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM login WHERE username = ?")
                .bind(&request.username)
                .fetch_optional(&self.pool)
                .await?;

        let password_hash = password_hash
            .ok_or_else(|| AppError::AuthError("Invalid username or password".into()))?;

        let password_matches = verify(request.password.as_bytes(), &password_hash)
            .map_err(|e| AppError::AuthError(e.to_string()))?;

        if !password_matches {
            return Err(AppError::AuthError("Invalid username or password".into()));
        }

        Ok(LoginResponse {
            success: true,
            token: session_token(),
            username: request.username,
        })
    }

    // Provision a credential; passwords are stored as bcrypt hashes only
    pub async fn create_credential(&self, username: &str, password: &str) -> AppResult<i64> {
        require_field(username, "username")?;
        require_field(password, "password")?;

        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM login WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("Username already exists".into()));
        }

        let password_hash = hash(password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let result = sqlx::query("INSERT INTO login (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(&password_hash)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}
