//! Shared pieces of the moderated write pipeline.
//!
//! Every write handler starts with [`require_api_user`] and ends with a
//! single INSERT or UPDATE; any failure in between aborts the operation
//! with nothing written.

use playa_core::error::CoreError;
use playa_core::types::DbId;
use playa_db::models::user::User;
use playa_db::repositories::UserRepo;
use playa_db::DbPool;

use crate::error::AppError;

/// Whether a shared create-or-update pipeline run inserts a new row
/// (201) or updates an existing one (200).
#[derive(Debug, Clone, Copy)]
pub enum WriteMode {
    Create,
    Update(DbId),
}

/// Load the acting user and check the API-allowed profile flag.
///
/// A missing row, an inactive account, and a cleared flag all answer
/// identically; the contract maps the refusal to 400.
pub async fn require_api_user(pool: &DbPool, user_id: DbId) -> Result<User, AppError> {
    let user = UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(CoreError::ApiNotAllowed)?;

    if !user.is_active || !user.api_allowed {
        tracing::warn!(user_id, "API access denied by profile flag");
        return Err(CoreError::ApiNotAllowed.into());
    }

    Ok(user)
}
