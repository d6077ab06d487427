use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use spark_shared::errors::{AppError, AppResult, ErrorCode};
use spark_shared::types::auth::AuthUser;
use spark_shared::types::ApiResponse;

use crate::models::{NewPreference, Preference, UpdatePreference};
use crate::AppState;

// --- POST /user/preferences ---

pub async fn create_preferences(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<(StatusCode, Json<ApiResponse<Preference>>)> {
    if state.preferences.find_by_user_id(user.id).is_ok() {
        return Err(AppError::new(
            ErrorCode::PreferenceAlreadyExists,
            "preferences already exist for this user",
        ));
    }

    let created = state.preferences.create(&NewPreference { user_id: user.id })?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

// --- GET /user/preferences ---

pub async fn get_preferences(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Preference>>> {
    let preference = state
        .preferences
        .find_by_user_id(user.id)
        .map_err(|e| e.or_not_found(ErrorCode::PreferenceNotFound, "preferences not found"))?;

    Ok(Json(ApiResponse::ok(preference)))
}

// --- PUT /user/preferences ---

#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdatePreferencesRequest {
    #[validate(range(min = 1, message = "max_distance_km must be positive"))]
    pub max_distance_km: Option<i32>,
    #[validate(range(min = 18, max = 120, message = "min_age must be between 18 and 120"))]
    pub min_age: Option<i32>,
    #[validate(range(min = 18, max = 120, message = "max_age must be between 18 and 120"))]
    pub max_age: Option<i32>,
    pub notify_new_matches: Option<bool>,
    pub notify_messages: Option<bool>,
    pub show_online_status: Option<bool>,
    pub show_last_active: Option<bool>,
    pub show_distance: Option<bool>,
}

pub async fn update_preferences(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> AppResult<Json<ApiResponse<Preference>>> {
    req.validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;

    let current = state
        .preferences
        .find_by_user_id(user.id)
        .map_err(|e| e.or_not_found(ErrorCode::PreferenceNotFound, "preferences not found"))?;

    // The age window must stay consistent with whatever is already stored.
    let min_age = req.min_age.unwrap_or(current.min_age);
    let max_age = req.max_age.unwrap_or(current.max_age);
    if min_age > max_age {
        return Err(AppError::new(
            ErrorCode::InvalidPreferenceBounds,
            "min_age must not exceed max_age",
        ));
    }

    let changes = UpdatePreference {
        max_distance_km: req.max_distance_km,
        min_age: req.min_age,
        max_age: req.max_age,
        notify_new_matches: req.notify_new_matches,
        notify_messages: req.notify_messages,
        show_online_status: req.show_online_status,
        show_last_active: req.show_last_active,
        show_distance: req.show_distance,
    };

    let updated = state.preferences.update(user.id, &changes)?;

    Ok(Json(ApiResponse::ok(updated)))
}

// --- DELETE /user/preferences ---

pub async fn delete_preferences(
    user: AuthUser,
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<()>>> {
    state
        .preferences
        .delete(user.id)
        .map_err(|e| e.or_not_found(ErrorCode::PreferenceNotFound, "preferences not found"))?;

    Ok(Json(ApiResponse::ok_with_message((), "preferences deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_updates() {
        let req = UpdatePreferencesRequest {
            max_distance_km: Some(25),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_underage_bounds() {
        let req = UpdatePreferencesRequest {
            min_age: Some(16),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_distance() {
        let req = UpdatePreferencesRequest {
            max_distance_km: Some(0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }
}
