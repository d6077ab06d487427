use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use spark_shared::errors::{AppError, AppResult, ErrorCode};
use spark_shared::types::auth::AuthUser;
use spark_shared::types::ApiResponse;

use crate::models::{Profile, UpdateProfile};
use crate::AppState;

// --- GET /user/profile ---

pub async fn get_profile(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let profile = state
        .profiles
        .find_by_user_id(user.id)
        .map_err(|e| e.or_not_found(ErrorCode::ProfileNotFound, "profile not found"))?;

    Ok(Json(ApiResponse::ok(profile)))
}

// --- PUT /user/profile ---

#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub location: Option<String>,
    pub photos: Option<Vec<String>>,
}

fn parse_birth_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError::new(
            ErrorCode::ValidationError,
            "invalid birth_date format, expected YYYY-MM-DD",
        )
    })
}

pub async fn update_profile(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    if let Some(name) = &req.display_name {
        if name.len() < 3 || name.len() > 100 {
            return Err(AppError::new(
                ErrorCode::InvalidDisplayName,
                "display name must be between 3 and 100 characters",
            ));
        }
    }

    let birth_date = req.birth_date.as_deref().map(parse_birth_date).transpose()?;

    let photos = req
        .photos
        .map(|p| serde_json::to_value(p))
        .transpose()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let changes = UpdateProfile {
        display_name: req.display_name,
        bio: req.bio,
        gender: req.gender,
        birth_date,
        location: req.location,
        photos,
    };

    let updated = state
        .profiles
        .update(user.id, &changes)
        .map_err(|e| e.or_not_found(ErrorCode::ProfileNotFound, "profile not found"))?;

    Ok(Json(ApiResponse::ok(updated)))
}
