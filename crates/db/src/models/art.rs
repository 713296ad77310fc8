//! Art installation models. Read-only via the API; rows are loaded by
//! administrators from the placement data.

use chrono::NaiveTime;
use playa_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::year::YearRef;

/// An art installation row joined with its year label.
#[derive(Debug, Clone, FromRow)]
pub struct ArtInstallation {
    pub id: DbId,
    pub year_id: DbId,
    pub year_label: String,
    pub name: String,
    pub slug: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub circular_street_id: Option<DbId>,
    pub time_address: Option<NaiveTime>,
    pub distance: Option<i32>,
    pub location_string: Option<String>,
    pub bm_fm_id: Option<i32>,
}

/// DTO for seeding an art installation (admin/bootstrap path).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateArtInstallation {
    pub year_id: DbId,
    pub name: String,
    pub slug: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub circular_street_id: Option<DbId>,
    pub time_address: Option<NaiveTime>,
}

/// Public shape for an art installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtDetail {
    pub id: DbId,
    pub name: String,
    pub year: YearRef,
    pub slug: Option<String>,
    pub artist: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub circular_street: Option<DbId>,
    pub time_address: Option<NaiveTime>,
}

impl From<ArtInstallation> for ArtDetail {
    fn from(a: ArtInstallation) -> Self {
        ArtDetail {
            id: a.id,
            name: a.name,
            year: YearRef {
                id: a.year_id,
                year: a.year_label,
            },
            slug: a.slug,
            artist: a.artist,
            description: a.description,
            url: a.url,
            contact_email: a.contact_email,
            circular_street: a.circular_street_id,
            time_address: a.time_address,
        }
    }
}
