//! Full-text search routes.
//!
//! ```text
//! GET /search?q=&year=  -> search_events
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search::search_events))
}
