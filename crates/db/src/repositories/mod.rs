//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async accessors that
//! take `&PgPool` as the first argument. Public-path accessors bake the
//! visibility rules in (accepted + listed events, listed + undeleted
//! camps); write paths use the explicit "any" lookups.

pub mod art_repo;
pub mod camp_repo;
pub mod event_repo;
pub mod event_type_repo;
pub mod occurrence_repo;
pub mod search_repo;
pub mod street_repo;
pub mod user_repo;
pub mod year_repo;

pub use art_repo::ArtRepo;
pub use camp_repo::CampRepo;
pub use event_repo::EventRepo;
pub use event_type_repo::EventTypeRepo;
pub use occurrence_repo::OccurrenceRepo;
pub use search_repo::SearchRepo;
pub use street_repo::{CircularStreetRepo, TimeStreetRepo};
pub use user_repo::UserRepo;
pub use year_repo::YearRepo;
