use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use spark_shared::errors::{AppError, AppResult, ErrorCode};
use spark_shared::types::auth::AuthUser;
use spark_shared::types::ApiResponse;

use crate::models::{Match, MatchStatus, NewMatch};
use crate::AppState;

// --- POST /matches ---

#[derive(Debug, Deserialize)]
pub struct CreateMatchRequest {
    pub user_id: Uuid,
}

pub async fn create_match(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMatchRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Match>>)> {
    if req.user_id == user.id {
        return Err(AppError::new(ErrorCode::CannotMatchSelf, "cannot match with yourself"));
    }

    state
        .users
        .find_by_id(req.user_id)
        .map_err(|e| e.or_not_found(ErrorCode::NotFound, "user not found"))?;

    // The unique pair index is the backstop; checking first gives the
    // caller a meaningful error either way round.
    match state.matches.find_by_users(user.id, req.user_id) {
        Ok(_) => {
            return Err(AppError::new(
                ErrorCode::MatchAlreadyExists,
                "a match between these users already exists",
            ))
        }
        Err(AppError::Database(diesel::result::Error::NotFound)) => {}
        Err(other) => return Err(other),
    }

    let created = state.matches.create(&NewMatch::pending(user.id, req.user_id))?;

    tracing::info!(match_id = %created.id, user1 = %created.user1_id, user2 = %created.user2_id, "match proposed");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

// --- GET /matches ---

pub async fn list_matches(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<Match>>>> {
    let rows = state.matches.find_by_user_id(user.id)?;
    Ok(Json(ApiResponse::ok(rows)))
}

// --- PUT /matches/:id/status ---

#[derive(Debug, Deserialize)]
pub struct UpdateMatchStatusRequest {
    pub status: String,
}

pub async fn update_match_status(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMatchStatusRequest>,
) -> AppResult<Json<ApiResponse<Match>>> {
    let status = req.status.parse::<MatchStatus>().map_err(|_| {
        AppError::new(
            ErrorCode::InvalidMatchStatus,
            format!("unknown match status: {}", req.status),
        )
    })?;

    let found = state
        .matches
        .find_by_id(id)
        .map_err(|e| e.or_not_found(ErrorCode::MatchNotFound, "match not found"))?;

    if !found.involves(user.id) {
        return Err(AppError::new(
            ErrorCode::NotMatchParticipant,
            "you are not part of this match",
        ));
    }

    let updated = state.matches.update_status(id, status)?;

    Ok(Json(ApiResponse::ok(updated)))
}

// --- DELETE /matches/:id ---

pub async fn delete_match(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let found = state
        .matches
        .find_by_id(id)
        .map_err(|e| e.or_not_found(ErrorCode::MatchNotFound, "match not found"))?;

    if !found.involves(user.id) {
        return Err(AppError::new(
            ErrorCode::NotMatchParticipant,
            "you are not part of this match",
        ));
    }

    state.matches.delete(id)?;

    Ok(Json(ApiResponse::ok_with_message((), "match deleted")))
}
