//! Art installation routes (read-only).
//!
//! ```text
//! GET /art                      -> list_art
//! GET /years/{year}/art         -> list_art_for_year
//! GET /years/{year}/art/{id}    -> get_art
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::art;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/art", get(art::list_art))
        .route("/years/{year}/art", get(art::list_art_for_year))
        .route("/years/{year}/art/{id}", get(art::get_art))
}
