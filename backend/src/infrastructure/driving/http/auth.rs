use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use chrono::Utc;
use shared::{LoginRequest, LoginResponse, RegisterUserRequest, RegisterUserResponse};
use crate::application::auth::commands::authenticate_user::{self, AuthenticateUserCommand};
use crate::application::auth::commands::register_user::{self, RegisterUserCommand};
use crate::application::{AppError, Validate};
use crate::infrastructure::AppState;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<Json<RegisterUserResponse>, AppError> {
    let Json(req) = payload?;
    let cmd = RegisterUserCommand {
        email: req.email,
        name: req.name,
        password: req.password,
    };
    cmd.validate(Utc::now())?;

    let user = register_user::execute(&*state.users, &*state.password_hasher, cmd).await?;

    Ok(Json(RegisterUserResponse {
        user_id: *user.user_id.as_uuid(),
        name: user.name,
        email: user.email,
    }))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(req) = payload?;
    let cmd = AuthenticateUserCommand {
        email: req.email,
        password: req.password,
    };
    cmd.validate(Utc::now())?;

    let issued = authenticate_user::execute(
        &*state.users,
        &*state.password_hasher,
        &*state.token_issuer,
        cmd,
    )
    .await?;

    Ok(Json(LoginResponse { token: issued.token }))
}
