use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use spark_shared::errors::{AppResult, ErrorCode};
use spark_shared::types::auth::AuthUser;
use spark_shared::types::ApiResponse;

use crate::models::User;
use crate::AppState;

pub async fn me(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<User>>> {
    let record = state
        .users
        .find_by_id(user.id)
        .map_err(|e| e.or_not_found(ErrorCode::NotFound, "user not found"))?;

    Ok(Json(ApiResponse::ok(record)))
}
