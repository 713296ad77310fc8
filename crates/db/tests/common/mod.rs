//! Shared seeding helpers for repository integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use playa_core::types::{DbId, Timestamp};
use playa_db::models::camp::CampChanges;
use playa_db::models::event::EventChanges;
use playa_db::models::occurrence::{CreateOccurrence, Occurrence};
use playa_db::models::user::{CreateUser, User};
use playa_db::models::year::{CreateYear, Year};
use playa_db::repositories::{CampRepo, EventRepo, OccurrenceRepo, UserRepo, YearRepo};
use sqlx::PgPool;

pub async fn seed_year(pool: &PgPool, label: &str) -> Year {
    YearRepo::create(
        pool,
        &CreateYear {
            year: label.to_string(),
            location: "Black Rock Desert".to_string(),
            participants: None,
            theme: None,
            notes: None,
            event_start: None,
            event_end: None,
        },
    )
    .await
    .expect("seed year")
}

pub async fn seed_user(pool: &PgPool, username: &str, api_allowed: bool) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            first_name: "Dusty".to_string(),
            last_name: "Tester".to_string(),
            is_active: true,
            api_allowed,
        },
    )
    .await
    .expect("seed user")
}

/// Insert a camp with the given name and visibility flag.
pub async fn seed_camp(
    pool: &PgPool,
    year_id: DbId,
    creator_id: DbId,
    name: &str,
    list_online: bool,
) -> DbId {
    let changes = CampChanges {
        name: Some(name.to_string()),
        list_online: Some(list_online),
        ..Default::default()
    };
    CampRepo::insert(pool, year_id, creator_id, &changes)
        .await
        .expect("seed camp")
        .id
}

/// Insert an event with the given title, moderation state, and
/// visibility flag.
pub async fn seed_event(
    pool: &PgPool,
    year_id: DbId,
    creator_id: DbId,
    title: &str,
    moderation: &str,
    list_online: bool,
) -> DbId {
    let changes = EventChanges {
        title: Some(title.to_string()),
        moderation: Some(moderation.to_string()),
        list_online: Some(list_online),
        ..Default::default()
    };
    EventRepo::insert(pool, year_id, 1, creator_id, &changes)
        .await
        .expect("seed event")
        .id
}

pub fn ts(y: i32, mo: u32, d: u32, h: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

pub async fn seed_occurrence(
    pool: &PgPool,
    event_id: DbId,
    start_time: Timestamp,
    end_time: Timestamp,
    notes: &str,
) -> Occurrence {
    OccurrenceRepo::create(
        pool,
        &CreateOccurrence {
            event_id,
            start_time,
            end_time,
            notes: Some(notes.to_string()),
        },
    )
    .await
    .expect("seed occurrence")
}
