//! Theme camp routes.
//!
//! ```text
//! GET    /camps                     -> list_camps (cached)
//! GET    /years/{year}/camps        -> list_camps_for_year (cached)
//! POST   /years/{year}/camps        -> create_camp (auth)
//! GET    /years/{year}/camps/{id}   -> get_camp
//! PUT    /years/{year}/camps/{id}   -> update_camp (auth)
//! DELETE /years/{year}/camps/{id}   -> delete_camp (auth)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::camp;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/camps", get(camp::list_camps))
        .route(
            "/years/{year}/camps",
            get(camp::list_camps_for_year).post(camp::create_camp),
        )
        .route(
            "/years/{year}/camps/{id}",
            get(camp::get_camp)
                .put(camp::update_camp)
                .delete(camp::delete_camp),
        )
}
