//! Playa event routes.
//!
//! ```text
//! GET    /events                     -> list_events (cached)
//! GET    /years/{year}/events        -> list_events_for_year (cached; ?start_time/?end_time)
//! POST   /years/{year}/events        -> create_event (auth)
//! GET    /years/{year}/events/{id}   -> get_event
//! PUT    /years/{year}/events/{id}   -> update_event (auth)
//! DELETE /years/{year}/events/{id}   -> delete_event (auth)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(event::list_events))
        .route(
            "/years/{year}/events",
            get(event::list_events_for_year).post(event::create_event),
        )
        .route(
            "/years/{year}/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
}
