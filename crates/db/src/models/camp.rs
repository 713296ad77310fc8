//! Theme camp models.
//!
//! Camps are moderated via a `list_online` visibility flag plus a soft
//! `deleted` flag. The public repository mode filters both; the "all" mode
//! is reserved for privileged (write-path) access.

use chrono::NaiveTime;
use playa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::year::YearRef;

/// A bare row from the `theme_camps` table (write-path shape).
#[derive(Debug, Clone, FromRow)]
pub struct ThemeCamp {
    pub id: DbId,
    pub year_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub hometown: Option<String>,
    pub location_string: Option<String>,
    pub list_online: bool,
    pub circular_street_id: Option<DbId>,
    pub time_street_id: Option<DbId>,
    pub time_address: Option<NaiveTime>,
    pub bm_fm_id: Option<i32>,
    pub deleted: bool,
    pub creator_id: Option<DbId>,
}

/// A camp row joined with its year label (read-path shape).
#[derive(Debug, Clone, FromRow)]
pub struct CampRecord {
    pub id: DbId,
    pub year_id: DbId,
    pub year_label: String,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub hometown: Option<String>,
    pub location_string: Option<String>,
    pub circular_street_id: Option<DbId>,
    pub time_street_id: Option<DbId>,
    pub time_address: Option<NaiveTime>,
}

/// Typed write request for a camp.
///
/// The struct itself is the settable-field allow-list: anything else in
/// the payload (including `id`, `pk`, `bm_fm_id`, and `deleted`) is
/// rejected by serde rather than silently dropped. Boolean-like fields
/// arrive as text and are coerced by the write pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampWriteRequest {
    pub year: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub hometown: Option<String>,
    pub location_string: Option<String>,
    pub circular_street: Option<DbId>,
    pub time_street: Option<DbId>,
    pub list_online: Option<String>,
}

impl CampWriteRequest {
    /// True when no field at all was supplied.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.url.is_none()
            && self.contact_email.is_none()
            && self.hometown.is_none()
            && self.location_string.is_none()
            && self.circular_street.is_none()
            && self.time_street.is_none()
            && self.list_online.is_none()
    }
}

/// Resolved, typed field changes applied by a single INSERT or UPDATE.
/// `None` leaves the stored value untouched on update and falls back to
/// the column default on insert.
#[derive(Debug, Clone, Default)]
pub struct CampChanges {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub hometown: Option<String>,
    pub location_string: Option<String>,
    pub circular_street_id: Option<DbId>,
    pub time_street_id: Option<DbId>,
    pub list_online: Option<bool>,
}

/// Public shape for a theme camp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampDetail {
    pub id: DbId,
    pub year: YearRef,
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub hometown: Option<String>,
    pub location_string: Option<String>,
    pub circular_street: Option<DbId>,
    pub time_street: Option<DbId>,
    pub time_address: Option<NaiveTime>,
}

impl From<CampRecord> for CampDetail {
    fn from(c: CampRecord) -> Self {
        CampDetail {
            id: c.id,
            year: YearRef {
                id: c.year_id,
                year: c.year_label,
            },
            name: c.name,
            slug: c.slug,
            description: c.description,
            url: c.url,
            contact_email: c.contact_email,
            hometown: c.hometown,
            location_string: c.location_string,
            circular_street: c.circular_street_id,
            time_street: c.time_street_id,
            time_address: c.time_address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_detected() {
        assert!(CampWriteRequest::default().is_empty());
    }

    #[test]
    fn test_any_field_makes_request_non_empty() {
        let req = CampWriteRequest {
            name: Some("Camp Question Mark".into()),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn test_forbidden_fields_are_rejected() {
        let err = serde_json::from_value::<CampWriteRequest>(serde_json::json!({
            "name": "Camp X",
            "deleted": "1",
        }));
        assert!(err.is_err());
    }
}
