//! Repository for the `event_types` reference table.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::event_type::EventType;

/// Provides read access for event types.
pub struct EventTypeRepo;

impl EventTypeRepo {
    /// List all event types, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<EventType>, sqlx::Error> {
        sqlx::query_as::<_, EventType>("SELECT id, abbr, label FROM event_types ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }

    /// Find an event type by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EventType>, sqlx::Error> {
        sqlx::query_as::<_, EventType>("SELECT id, abbr, label FROM event_types WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event type by its abbreviation (e.g. `"WS"`).
    pub async fn find_by_abbr(pool: &PgPool, abbr: &str) -> Result<Option<EventType>, sqlx::Error> {
        sqlx::query_as::<_, EventType>("SELECT id, abbr, label FROM event_types WHERE abbr = $1")
            .bind(abbr)
            .fetch_optional(pool)
            .await
    }
}
