//! Year models. Years are immutable reference data created by
//! administrators; the API only reads them.

use chrono::NaiveDate;
use playa_core::calendar::date_range;
use playa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `years` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Year {
    pub id: DbId,
    pub year: String,
    pub location: String,
    pub participants: Option<i32>,
    pub theme: Option<String>,
    pub notes: Option<String>,
    pub event_start: Option<NaiveDate>,
    pub event_end: Option<NaiveDate>,
}

impl Year {
    /// Every day of the event, start and end inclusive.
    pub fn date_range(&self) -> Vec<NaiveDate> {
        date_range(self.event_start, self.event_end)
    }
}

/// DTO for seeding a year (admin/bootstrap path, not exposed via the API).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateYear {
    pub year: String,
    pub location: String,
    pub participants: Option<i32>,
    pub theme: Option<String>,
    pub notes: Option<String>,
    pub event_start: Option<NaiveDate>,
    pub event_end: Option<NaiveDate>,
}

/// Embedded year reference used by entity response shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearRef {
    pub id: DbId,
    pub year: String,
}

/// Public listing shape for a year.
#[derive(Debug, Clone, Serialize)]
pub struct YearSummary {
    pub id: DbId,
    pub year: String,
    pub location: String,
    pub participants: Option<i32>,
    pub theme: Option<String>,
}

impl From<Year> for YearSummary {
    fn from(y: Year) -> Self {
        YearSummary {
            id: y.id,
            year: y.year,
            location: y.location,
            participants: y.participants,
            theme: y.theme,
        }
    }
}

/// Single-year shape, with the derived event-day sequence.
#[derive(Debug, Clone, Serialize)]
pub struct YearDetail {
    pub id: DbId,
    pub year: String,
    pub location: String,
    pub participants: Option<i32>,
    pub theme: Option<String>,
    pub notes: Option<String>,
    pub event_start: Option<NaiveDate>,
    pub event_end: Option<NaiveDate>,
    pub dates: Vec<NaiveDate>,
}

impl From<Year> for YearDetail {
    fn from(y: Year) -> Self {
        let dates = y.date_range();
        YearDetail {
            id: y.id,
            year: y.year,
            location: y.location,
            participants: y.participants,
            theme: y.theme,
            notes: y.notes,
            event_start: y.event_start,
            event_end: y.event_end,
            dates,
        }
    }
}
