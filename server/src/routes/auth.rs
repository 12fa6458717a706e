//! Registration and login handlers.

use api::auth::token;
use api::error::StoreError;
use api::{Credentials, LoginResponse, MessageResponse};
use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<MessageResponse>, ApiError> {
    if req.email.is_empty() {
        return Err(ApiError::missing_field("email"));
    }
    if req.password.is_empty() {
        return Err(ApiError::missing_field("password"));
    }

    state.users.create(&req.email, &req.password).await?;
    tracing::debug!("registered new user");

    Ok(Json(MessageResponse {
        message: "User creation successful".to_string(),
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.email.is_empty() {
        return Err(ApiError::missing_field("email"));
    }
    if req.password.is_empty() {
        return Err(ApiError::missing_field("password"));
    }

    let user = state
        .users
        .verify(&req.email, &req.password)
        .await
        .map_err(|e| match e {
            // At login an unknown email is a credential failure, not a 404.
            StoreError::NotFound => ApiError::Auth("User not found".to_string()),
            other => other.into(),
        })?;

    let token = token::issue(&state.keys, user.id)
        .map_err(|e| ApiError::Internal(format!("could not issue token: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        user: user.to_info(),
    }))
}
