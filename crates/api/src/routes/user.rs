//! User directory routes (read-only).
//!
//! ```text
//! GET /users        -> list_users
//! GET /users/{id}   -> get_user
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(user::list_users))
        .route("/users/{id}", get(user::get_user))
}
