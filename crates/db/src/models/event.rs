//! Playa event models — the central moderated entity.
//!
//! New events start unmoderated ('U'); only accepted ('A') events with
//! `list_online` set appear on public paths. Deleting an event means
//! transitioning it to rejected ('R'), never removing the row.

use playa_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::occurrence::OccurrenceTime;
use crate::models::year::YearRef;

/// A bare row from the `playa_events` table (write-path shape).
#[derive(Debug, Clone, FromRow)]
pub struct PlayaEvent {
    pub id: DbId,
    pub year_id: DbId,
    pub title: String,
    pub description: String,
    pub print_description: String,
    pub slug: Option<String>,
    pub event_type_id: DbId,
    pub hosted_by_camp_id: Option<DbId>,
    pub located_at_art_id: Option<DbId>,
    pub other_location: Option<String>,
    pub check_location: bool,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub all_day: bool,
    pub list_online: bool,
    pub list_contact_online: bool,
    pub speaker_series: bool,
    pub creator_id: DbId,
    pub moderation: String,
    pub password: Option<String>,
    pub password_hint: Option<String>,
}

/// An event row joined with its year label, event-type abbreviation, and
/// linked camp/art names (read-path shape).
#[derive(Debug, Clone, FromRow)]
pub struct EventRecord {
    pub id: DbId,
    pub year_id: DbId,
    pub year_label: String,
    pub title: String,
    pub description: String,
    pub print_description: String,
    pub slug: Option<String>,
    pub event_type_abbr: String,
    pub hosted_by_camp_id: Option<DbId>,
    pub camp_name: Option<String>,
    pub located_at_art_id: Option<DbId>,
    pub art_name: Option<String>,
    pub other_location: Option<String>,
    pub check_location: bool,
    pub url: Option<String>,
    pub all_day: bool,
}

/// Typed write request for an event.
///
/// The struct itself is the settable-field allow-list: anything else in
/// the payload (including `id` and `pk`) is rejected by serde rather than
/// silently dropped. Boolean-like fields arrive as text and are coerced
/// by the write pipeline; `moderation` takes a single letter in {U, A, R}.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventWriteRequest {
    pub year: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub print_description: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub other_location: Option<String>,
    pub event_type: Option<String>,
    pub hosted_by_camp: Option<DbId>,
    pub located_at_art: Option<DbId>,
    pub moderation: Option<String>,
    pub check_location: Option<String>,
    pub all_day: Option<String>,
    pub list_online: Option<String>,
    pub list_contact_online: Option<String>,
    pub speaker_series: Option<String>,
    pub password: Option<String>,
    pub password_hint: Option<String>,
}

impl EventWriteRequest {
    /// True when no field at all was supplied.
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.print_description.is_none()
            && self.slug.is_none()
            && self.url.is_none()
            && self.contact_email.is_none()
            && self.other_location.is_none()
            && self.event_type.is_none()
            && self.hosted_by_camp.is_none()
            && self.located_at_art.is_none()
            && self.moderation.is_none()
            && self.check_location.is_none()
            && self.all_day.is_none()
            && self.list_online.is_none()
            && self.list_contact_online.is_none()
            && self.speaker_series.is_none()
            && self.password.is_none()
            && self.password_hint.is_none()
    }
}

/// Resolved, typed field changes applied by a single INSERT or UPDATE.
/// `None` leaves the stored value untouched on update and falls back to
/// the column default on insert.
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub print_description: Option<String>,
    pub slug: Option<String>,
    pub url: Option<String>,
    pub contact_email: Option<String>,
    pub other_location: Option<String>,
    pub hosted_by_camp_id: Option<DbId>,
    pub located_at_art_id: Option<DbId>,
    pub moderation: Option<String>,
    pub check_location: Option<bool>,
    pub all_day: Option<bool>,
    pub list_online: Option<bool>,
    pub list_contact_online: Option<bool>,
    pub speaker_series: Option<bool>,
    pub password: Option<String>,
    pub password_hint: Option<String>,
}

/// Embedded reference to a linked camp or art installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: DbId,
    pub name: String,
}

/// Public shape for an event, including its occurrence times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub print_description: String,
    pub year: YearRef,
    pub slug: Option<String>,
    pub event_type: String,
    pub hosted_by_camp: Option<EntityRef>,
    pub located_at_art: Option<EntityRef>,
    pub other_location: Option<String>,
    pub check_location: bool,
    pub url: Option<String>,
    pub all_day: bool,
    pub occurrence_set: Vec<OccurrenceTime>,
}

impl EventDetail {
    /// Assemble the public shape from a joined record and its occurrences.
    pub fn from_record(r: EventRecord, occurrence_set: Vec<OccurrenceTime>) -> Self {
        let hosted_by_camp = match (r.hosted_by_camp_id, r.camp_name) {
            (Some(id), Some(name)) => Some(EntityRef { id, name }),
            _ => None,
        };
        let located_at_art = match (r.located_at_art_id, r.art_name) {
            (Some(id), Some(name)) => Some(EntityRef { id, name }),
            _ => None,
        };
        EventDetail {
            id: r.id,
            title: r.title,
            description: r.description,
            print_description: r.print_description,
            year: YearRef {
                id: r.year_id,
                year: r.year_label,
            },
            slug: r.slug,
            event_type: r.event_type_abbr,
            hosted_by_camp,
            located_at_art,
            other_location: r.other_location,
            check_location: r.check_location,
            url: r.url,
            all_day: r.all_day,
            occurrence_set,
        }
    }
}

/// Query parameters narrowing an event listing by occurrence times.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EventWindow {
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
}

impl EventWindow {
    pub fn is_unbounded(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }
}
