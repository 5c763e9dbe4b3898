use airline_management_system::{
    models::auth::LoginRequest, services::auth_service::AuthService, utils::error::AppError,
};
use async_trait::async_trait;
use sqlx::SqlitePool;
use test_context::{test_context, AsyncTestContext};

mod common {
    pub mod test_utils;
}
use common::test_utils::TestDb;

struct AuthContext {
    pool: SqlitePool,
    auth_service: AuthService,
}

#[async_trait]
impl AsyncTestContext for AuthContext {
    async fn setup() -> Self {
        let pool = TestDb::get_instance()
            .await
            .expect("Failed to get test database instance");

        AuthContext {
            auth_service: AuthService::new(pool.clone()),
            pool,
        }
    }

    async fn teardown(self) {
        self.pool.close().await;
    }
}

fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_login_with_valid_credentials(ctx: &AuthContext) -> Result<(), AppError> {
    ctx.auth_service
        .create_credential("admin", "s3cret")
        .await?;

    let response = ctx.auth_service.login(login_request("admin", "s3cret")).await?;
    assert!(response.success);
    assert_eq!(response.username, "admin");
    assert_eq!(response.token.len(), 64);
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_login_tokens_differ_per_session(ctx: &AuthContext) -> Result<(), AppError> {
    ctx.auth_service
        .create_credential("admin", "s3cret")
        .await?;

    let first = ctx.auth_service.login(login_request("admin", "s3cret")).await?;
    let second = ctx.auth_service.login(login_request("admin", "s3cret")).await?;
    assert_ne!(first.token, second.token);
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_login_with_wrong_password_fails(ctx: &AuthContext) -> Result<(), AppError> {
    ctx.auth_service
        .create_credential("admin", "s3cret")
        .await?;

    let result = ctx.auth_service.login(login_request("admin", "wrong")).await;
    assert!(matches!(result, Err(AppError::AuthError(_))));
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_login_with_unknown_user_fails(ctx: &AuthContext) -> Result<(), AppError> {
    let result = ctx.auth_service.login(login_request("nobody", "s3cret")).await;
    assert!(matches!(result, Err(AppError::AuthError(_))));
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_login_requires_username_and_password(ctx: &AuthContext) -> Result<(), AppError> {
    let result = ctx.auth_service.login(login_request("", "s3cret")).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));

    let result = ctx.auth_service.login(login_request("admin", "")).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_duplicate_username_conflicts(ctx: &AuthContext) -> Result<(), AppError> {
    ctx.auth_service
        .create_credential("admin", "s3cret")
        .await?;

    let result = ctx.auth_service.create_credential("admin", "other").await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
    Ok(())
}

#[test_context(AuthContext)]
#[tokio::test]
async fn test_password_is_not_stored_in_plain_text(ctx: &AuthContext) -> Result<(), AppError> {
    ctx.auth_service
        .create_credential("admin", "s3cret")
        .await?;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM login WHERE username = ?")
        .bind("admin")
        .fetch_one(&ctx.pool)
        .await?;
    assert_ne!(stored, "s3cret");
    assert!(stored.starts_with("$2"));
    Ok(())
}
