//! Full-text search over events and their occurrence notes.
//!
//! Both corpora are generated `tsvector` columns kept by Postgres; a
//! query matches an event when either the event's own text or any of
//! its occurrences' notes match. Only publicly visible events are
//! searchable.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::EventRecord;
use crate::repositories::event_repo::{EVENT_PUBLIC, EVENT_RECORD_SELECT};

/// Provides full-text search access for playa events.
pub struct SearchRepo;

impl SearchRepo {
    /// Search publicly visible events across all years.
    pub async fn search_events(
        pool: &PgPool,
        terms: &str,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let query = format!(
            "{EVENT_RECORD_SELECT}
             WHERE {EVENT_PUBLIC}
               AND (e.search_tsv @@ plainto_tsquery('english', $1)
                    OR EXISTS (SELECT 1 FROM occurrences o
                               WHERE o.event_id = e.id
                                 AND o.search_tsv @@ plainto_tsquery('english', $1)))
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(terms)
            .fetch_all(pool)
            .await
    }

    /// Search publicly visible events within one year.
    pub async fn search_events_for_year(
        pool: &PgPool,
        year_id: DbId,
        terms: &str,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let query = format!(
            "{EVENT_RECORD_SELECT}
             WHERE e.year_id = $2 AND {EVENT_PUBLIC}
               AND (e.search_tsv @@ plainto_tsquery('english', $1)
                    OR EXISTS (SELECT 1 FROM occurrences o
                               WHERE o.event_id = e.id
                                 AND o.search_tsv @@ plainto_tsquery('english', $1)))
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(terms)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }
}
