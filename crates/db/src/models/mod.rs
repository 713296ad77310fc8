//! Row models, write DTOs, and public response shapes.
//!
//! Row structs mirror table columns (`FromRow`). Response DTOs carry the
//! fixed public allow-list per entity; internal columns (passwords,
//! moderation letters, creator ids, import ids) never serialize publicly.

pub mod art;
pub mod camp;
pub mod event;
pub mod event_type;
pub mod occurrence;
pub mod street;
pub mod user;
pub mod year;
