//! Handlers for the read-only user directory.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use playa_core::error::CoreError;
use playa_core::types::DbId;
use playa_db::models::user::PublicUser;
use playa_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users
///
/// List active users, ordered by username.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list_active(&state.pool).await?;
    let data: Vec<PublicUser> = users.into_iter().map(PublicUser::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/users/{id}
///
/// Retrieve a single user by id.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", id)))?;

    Ok(Json(DataResponse {
        data: PublicUser::from(user),
    }))
}
