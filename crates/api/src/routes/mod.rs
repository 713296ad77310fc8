pub mod art;
pub mod camp;
pub mod event;
pub mod health;
pub mod search;
pub mod street;
pub mod user;
pub mod year;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /years                           year list (+ derived day sequence)
/// /years/{year}                    single year by label
///
/// /cstreets                        all circular streets
/// /years/{year}/cstreets           circular streets for a year
/// /tstreets                        all time streets
/// /years/{year}/tstreets           time streets for a year
///
/// /art                             all art installations
/// /years/{year}/art                art for a year
/// /years/{year}/art/{id}           single installation
///
/// /camps                           public camps (cached)
/// /years/{year}/camps              public camps for a year (GET, POST)
/// /years/{year}/camps/{id}         single camp (GET, PUT, DELETE)
///
/// /events                          public events (cached)
/// /years/{year}/events             public events for a year (GET, POST)
///                                  GET takes ?start_time= and ?end_time=
/// /years/{year}/events/{id}        single event (GET, PUT, DELETE)
///
/// /users                           active user directory
/// /users/{id}                      single user
///
/// /search?q=&year=                 full-text event search
/// ```
///
/// Only the verbs listed are mounted; anything else on these paths
/// answers 405. The collection paths deliberately carry no DELETE
/// route, so a delete without an id never reaches a handler.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(year::router())
        .merge(street::router())
        .merge(art::router())
        .merge(camp::router())
        .merge(event::router())
        .merge(user::router())
        .merge(search::router())
}
