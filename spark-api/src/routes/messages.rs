use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use spark_shared::errors::{AppError, AppResult, ErrorCode};
use spark_shared::types::auth::AuthUser;
use spark_shared::types::ApiResponse;

use crate::models::{Message, NewMessage};
use crate::AppState;

// --- POST /messages ---

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub content: String,
}

pub async fn send_message(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Message>>)> {
    if req.content.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::EmptyMessageContent,
            "message content must not be empty",
        ));
    }

    state
        .users
        .find_by_id(req.receiver_id)
        .map_err(|e| e.or_not_found(ErrorCode::NotFound, "receiver not found"))?;

    let message = state.messages.create(&NewMessage {
        sender_id: user.id,
        receiver_id: req.receiver_id,
        content: req.content,
    })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(message))))
}

// --- GET /conversations/:user_id ---

pub async fn get_conversation(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(other_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Message>>>> {
    let rows = state.messages.conversation(user.id, other_id)?;
    Ok(Json(ApiResponse::ok(rows)))
}

// --- PUT /messages/:id/read ---

pub async fn mark_message_read(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Message>>> {
    let message = state
        .messages
        .find_by_id(id)
        .map_err(|e| e.or_not_found(ErrorCode::MessageNotFound, "message not found"))?;

    if message.receiver_id != user.id {
        return Err(AppError::new(
            ErrorCode::NotMessageParticipant,
            "only the receiver can mark a message as read",
        ));
    }

    let updated = state.messages.mark_read(id)?;

    Ok(Json(ApiResponse::ok(updated)))
}

// --- DELETE /messages/:id ---

pub async fn delete_message(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    let message = state
        .messages
        .find_by_id(id)
        .map_err(|e| e.or_not_found(ErrorCode::MessageNotFound, "message not found"))?;

    if message.sender_id != user.id {
        return Err(AppError::new(
            ErrorCode::NotMessageParticipant,
            "only the sender can delete a message",
        ));
    }

    state.messages.delete(id)?;

    Ok(Json(ApiResponse::ok_with_message((), "message deleted")))
}
