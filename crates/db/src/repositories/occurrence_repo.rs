//! Repository for the `occurrences` table. Rows are owned by the
//! external scheduling collaborator; the API reads them to enrich
//! event responses, and tests seed them directly.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::occurrence::{CreateOccurrence, Occurrence};

const COLUMNS: &str = "id, event_id, start_time, end_time, notes";

/// Provides read access (plus test/bootstrap inserts) for occurrences.
pub struct OccurrenceRepo;

impl OccurrenceRepo {
    /// List one event's occurrences, earliest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Occurrence>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM occurrences WHERE event_id = $1 ORDER BY start_time ASC"
        );
        sqlx::query_as::<_, Occurrence>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List the occurrences of a batch of events in one round trip,
    /// earliest first. Used when assembling event listings.
    pub async fn list_for_events(
        pool: &PgPool,
        event_ids: &[DbId],
    ) -> Result<Vec<Occurrence>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM occurrences WHERE event_id = ANY($1) ORDER BY start_time ASC"
        );
        sqlx::query_as::<_, Occurrence>(&query)
            .bind(event_ids)
            .fetch_all(pool)
            .await
    }

    /// Insert an occurrence. Test/bootstrap path.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOccurrence,
    ) -> Result<Occurrence, sqlx::Error> {
        let query = format!(
            "INSERT INTO occurrences (event_id, start_time, end_time, notes)
             VALUES ($1, $2, $3, COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Occurrence>(&query)
            .bind(input.event_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }
}
