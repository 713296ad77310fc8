//! Domain layer shared by the DB and API crates.
//!
//! Zero internal dependencies by design: everything here is usable from the
//! repository layer, the HTTP layer, and tests without pulling in sqlx or
//! axum.

pub mod cache;
pub mod calendar;
pub mod coerce;
pub mod error;
pub mod moderation;
pub mod types;
