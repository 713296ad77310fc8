//! Circular and time street models. Both are read-only location
//! references scoped to a year.

use playa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::year::YearRef;

/// A circular street row joined with its year label.
#[derive(Debug, Clone, FromRow)]
pub struct CircularStreet {
    pub id: DbId,
    pub year_id: DbId,
    pub year_label: String,
    pub name: String,
    pub sort_order: Option<i32>,
    pub width: Option<i32>,
    pub distance_from_center: Option<i32>,
}

/// A time street row joined with its year label.
#[derive(Debug, Clone, FromRow)]
pub struct TimeStreet {
    pub id: DbId,
    pub year_id: DbId,
    pub year_label: String,
    pub hour: i32,
    pub minute: i32,
    pub name: String,
    pub width: Option<i32>,
}

/// DTO for seeding a circular street (admin/bootstrap path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCircularStreet {
    pub year_id: DbId,
    pub name: String,
    pub sort_order: Option<i32>,
    pub width: Option<i32>,
    pub distance_from_center: Option<i32>,
}

/// DTO for seeding a time street (admin/bootstrap path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTimeStreet {
    pub year_id: DbId,
    pub hour: i32,
    pub minute: i32,
    pub name: String,
    pub width: Option<i32>,
}

/// Public shape for a circular street. `order` is the published name of
/// the ordering column.
#[derive(Debug, Clone, Serialize)]
pub struct CircularStreetDetail {
    pub id: DbId,
    pub year: YearRef,
    pub name: String,
    pub order: Option<i32>,
    pub width: Option<i32>,
    pub distance_from_center: Option<i32>,
}

impl From<CircularStreet> for CircularStreetDetail {
    fn from(s: CircularStreet) -> Self {
        CircularStreetDetail {
            id: s.id,
            year: YearRef {
                id: s.year_id,
                year: s.year_label,
            },
            name: s.name,
            order: s.sort_order,
            width: s.width,
            distance_from_center: s.distance_from_center,
        }
    }
}

/// Public shape for a time street.
#[derive(Debug, Clone, Serialize)]
pub struct TimeStreetDetail {
    pub id: DbId,
    pub year: YearRef,
    pub hour: i32,
    pub minute: i32,
    pub name: String,
    pub width: Option<i32>,
}

impl From<TimeStreet> for TimeStreetDetail {
    fn from(s: TimeStreet) -> Self {
        TimeStreetDetail {
            id: s.id,
            year: YearRef {
                id: s.year_id,
                year: s.year_label,
            },
            hour: s.hour,
            minute: s.minute,
            name: s.name,
            width: s.width,
        }
    }
}
