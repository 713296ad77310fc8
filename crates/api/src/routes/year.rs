//! Year catalog routes.
//!
//! ```text
//! GET /years         -> list_years
//! GET /years/{year}  -> get_year
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::year;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/years", get(year::list_years))
        .route("/years/{year}", get(year::get_year))
}
