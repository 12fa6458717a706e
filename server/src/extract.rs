//! Bearer-token authentication extractor.
//!
//! This is the single point where "who is calling" is established: protected
//! handlers take an [`AuthUser`] argument, and a request with a missing or
//! unverifiable `Authorization: Bearer` header is rejected with 401 before
//! the handler body runs. No downstream code re-derives identity.

use api::auth::token;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller's owner id.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

        let user_id = token::verify(&state.keys, token)
            .map_err(|e| ApiError::Unauthorized(e.to_string()))?;

        Ok(AuthUser(user_id))
    }
}
