//! Street reference routes.
//!
//! ```text
//! GET /cstreets                 -> list_cstreets
//! GET /years/{year}/cstreets    -> list_cstreets_for_year
//! GET /tstreets                 -> list_tstreets
//! GET /years/{year}/tstreets    -> list_tstreets_for_year
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::street;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cstreets", get(street::list_cstreets))
        .route("/years/{year}/cstreets", get(street::list_cstreets_for_year))
        .route("/tstreets", get(street::list_tstreets))
        .route("/years/{year}/tstreets", get(street::list_tstreets_for_year))
}
