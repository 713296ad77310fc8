//! Event type reference data, seeded by migration.

use playa_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// The type assigned when a create request carries no `event_type` field.
pub const DEFAULT_EVENT_TYPE_ID: DbId = 1;

/// A row from the `event_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EventType {
    pub id: DbId,
    pub abbr: String,
    pub label: String,
}
