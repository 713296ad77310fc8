//! Occurrence models. Occurrences belong to the external scheduling
//! collaborator; this layer reads them and seeds them in tests.

use playa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `occurrences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Occurrence {
    pub id: DbId,
    pub event_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub notes: String,
}

/// DTO for seeding an occurrence (scheduling collaborator / tests).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOccurrence {
    pub event_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub notes: Option<String>,
}

/// The start/end pair exposed in event responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceTime {
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}
