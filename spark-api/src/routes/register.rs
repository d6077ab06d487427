use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use spark_shared::errors::{AppError, AppResult, ErrorCode};
use spark_shared::types::ApiResponse;

use crate::models::{NewProfile, NewUser};
use crate::services::{auth_service, token_service};
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 20, message = "username must be between 3 and 20 characters"))]
    pub username: String,
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<CreateUserResponse>>)> {
    req.validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;

    auth_service::validate_password(&req.password)?;

    if state.users.email_exists(&req.email)? {
        return Err(AppError::new(ErrorCode::EmailAlreadyExists, "email already registered"));
    }

    let password_hash = auth_service::hash_password(&req.password)?;
    let user = state.users.create(&NewUser {
        email: req.email.to_lowercase(),
        password_hash,
    })?;

    // The profile is created together with the user; the username becomes
    // its display name.
    let profile = state.profiles.create(&NewProfile {
        user_id: user.id,
        display_name: req.username,
    })?;

    let token = token_service::create_access_token(
        user.id,
        &state.config.jwt_secret,
        state.config.jwt_ttl_secs,
    )?;

    tracing::info!(user_id = %user.id, email = %user.email, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreateUserResponse {
            id: user.id,
            username: profile.display_name,
            email: user.email,
            token,
        })),
    ))
}
