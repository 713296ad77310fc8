//! Repository for the `playa_events` table.
//!
//! Public accessors bake in `moderation = 'A' AND list_online = TRUE`;
//! the write path uses the unfiltered "any" lookup so hidden and
//! rejected events stay reachable for privileged operations.

use playa_core::moderation::MODERATION_REJECTED;
use playa_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{EventChanges, EventRecord, PlayaEvent};

/// Bare table columns, for the write-path shape.
const EVENT_COLUMNS: &str = "id, year_id, title, description, print_description, slug, \
     event_type_id, hosted_by_camp_id, located_at_art_id, other_location, \
     check_location, url, contact_email, all_day, list_online, \
     list_contact_online, speaker_series, creator_id, moderation, \
     password, password_hint";

/// Joined select for the read-path shape. Shared with the search
/// accessor.
pub(crate) const EVENT_RECORD_SELECT: &str =
    "SELECT e.id, e.year_id, y.year AS year_label, e.title, e.description, \
            e.print_description, e.slug, et.abbr AS event_type_abbr, \
            e.hosted_by_camp_id, tc.name AS camp_name, \
            e.located_at_art_id, ai.name AS art_name, \
            e.other_location, e.check_location, e.url, e.all_day \
     FROM playa_events e \
     JOIN years y ON y.id = e.year_id \
     JOIN event_types et ON et.id = e.event_type_id \
     LEFT JOIN theme_camps tc ON tc.id = e.hosted_by_camp_id \
     LEFT JOIN art_installations ai ON ai.id = e.located_at_art_id";

/// Visibility filter baked into every public accessor. Shared with the
/// search accessor.
pub(crate) const EVENT_PUBLIC: &str = "e.moderation = 'A' AND e.list_online = TRUE";

/// Provides data access for playa events.
pub struct EventRepo;

impl EventRepo {
    /// List all publicly visible events.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<EventRecord>, sqlx::Error> {
        let query = format!("{EVENT_RECORD_SELECT} WHERE {EVENT_PUBLIC} ORDER BY e.id ASC");
        sqlx::query_as::<_, EventRecord>(&query).fetch_all(pool).await
    }

    /// List one year's publicly visible events.
    pub async fn list_public_for_year(
        pool: &PgPool,
        year_id: DbId,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let query = format!(
            "{EVENT_RECORD_SELECT} WHERE e.year_id = $1 AND {EVENT_PUBLIC} ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }

    /// List one year's publicly visible events whose occurrences fall
    /// inside the given window.
    ///
    /// Matching occurrence ids are resolved first, then events selected
    /// by id: with both bounds, `start_time >= start AND end_time <=
    /// end`; with one bound, that bound alone. The year and visibility
    /// filters always apply.
    pub async fn list_public_for_year_in_window(
        pool: &PgPool,
        year_id: DbId,
        start_time: Option<Timestamp>,
        end_time: Option<Timestamp>,
    ) -> Result<Vec<EventRecord>, sqlx::Error> {
        let query = format!(
            "{EVENT_RECORD_SELECT}
             WHERE e.year_id = $1 AND {EVENT_PUBLIC}
               AND e.id IN (
                    SELECT o.event_id FROM occurrences o
                    WHERE ($2::timestamptz IS NULL OR o.start_time >= $2)
                      AND ($3::timestamptz IS NULL OR o.end_time <= $3))
             ORDER BY e.id ASC"
        );
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(year_id)
            .bind(start_time)
            .bind(end_time)
            .fetch_all(pool)
            .await
    }

    /// The zero-or-one publicly visible event with the given id inside a
    /// year. A hidden or rejected event resolves to `None`, not an error.
    pub async fn find_public_in_year(
        pool: &PgPool,
        year_id: DbId,
        id: DbId,
    ) -> Result<Option<EventRecord>, sqlx::Error> {
        let query =
            format!("{EVENT_RECORD_SELECT} WHERE e.year_id = $1 AND e.id = $2 AND {EVENT_PUBLIC}");
        sqlx::query_as::<_, EventRecord>(&query)
            .bind(year_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by primary key regardless of moderation state
    /// (write path).
    pub async fn find_by_id_any(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlayaEvent>, sqlx::Error> {
        let query = format!("SELECT {EVENT_COLUMNS} FROM playa_events WHERE id = $1");
        sqlx::query_as::<_, PlayaEvent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an event with the given resolved changes.
    ///
    /// Absent fields fall back to the column defaults; in particular new
    /// events start unmoderated unless the request carried a valid
    /// moderation letter.
    pub async fn insert(
        pool: &PgPool,
        year_id: DbId,
        event_type_id: DbId,
        creator_id: DbId,
        changes: &EventChanges,
    ) -> Result<PlayaEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO playa_events
                (year_id, event_type_id, creator_id, title, description,
                 print_description, slug, url, contact_email, other_location,
                 hosted_by_camp_id, located_at_art_id, moderation,
                 check_location, all_day, list_online, list_contact_online,
                 speaker_series, password, password_hint)
             VALUES ($1, $2, $3,
                     COALESCE($4, ''), COALESCE($5, ''), COALESCE($6, ''),
                     $7, $8, $9, $10, $11, $12,
                     COALESCE($13, 'U'),
                     COALESCE($14, FALSE), COALESCE($15, FALSE),
                     COALESCE($16, TRUE), COALESCE($17, FALSE),
                     COALESCE($18, FALSE), $19, $20)
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, PlayaEvent>(&query)
            .bind(year_id)
            .bind(event_type_id)
            .bind(creator_id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(&changes.print_description)
            .bind(&changes.slug)
            .bind(&changes.url)
            .bind(&changes.contact_email)
            .bind(&changes.other_location)
            .bind(changes.hosted_by_camp_id)
            .bind(changes.located_at_art_id)
            .bind(&changes.moderation)
            .bind(changes.check_location)
            .bind(changes.all_day)
            .bind(changes.list_online)
            .bind(changes.list_contact_online)
            .bind(changes.speaker_series)
            .bind(&changes.password)
            .bind(&changes.password_hint)
            .fetch_one(pool)
            .await
    }

    /// Apply resolved changes to an existing event. `None` fields keep
    /// the stored value. The year and event type are never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &EventChanges,
    ) -> Result<Option<PlayaEvent>, sqlx::Error> {
        let query = format!(
            "UPDATE playa_events SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                print_description = COALESCE($4, print_description),
                slug = COALESCE($5, slug),
                url = COALESCE($6, url),
                contact_email = COALESCE($7, contact_email),
                other_location = COALESCE($8, other_location),
                hosted_by_camp_id = COALESCE($9, hosted_by_camp_id),
                located_at_art_id = COALESCE($10, located_at_art_id),
                moderation = COALESCE($11, moderation),
                check_location = COALESCE($12, check_location),
                all_day = COALESCE($13, all_day),
                list_online = COALESCE($14, list_online),
                list_contact_online = COALESCE($15, list_contact_online),
                speaker_series = COALESCE($16, speaker_series),
                password = COALESCE($17, password),
                password_hint = COALESCE($18, password_hint)
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        );
        sqlx::query_as::<_, PlayaEvent>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(&changes.print_description)
            .bind(&changes.slug)
            .bind(&changes.url)
            .bind(&changes.contact_email)
            .bind(&changes.other_location)
            .bind(changes.hosted_by_camp_id)
            .bind(changes.located_at_art_id)
            .bind(&changes.moderation)
            .bind(changes.check_location)
            .bind(changes.all_day)
            .bind(changes.list_online)
            .bind(changes.list_contact_online)
            .bind(changes.speaker_series)
            .bind(&changes.password)
            .bind(&changes.password_hint)
            .fetch_optional(pool)
            .await
    }

    /// Transition an event to rejected. Returns `true` if a row was
    /// updated. The row stays resolvable through
    /// [`EventRepo::find_by_id_any`].
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE playa_events SET moderation = $2 WHERE id = $1")
            .bind(id)
            .bind(MODERATION_REJECTED)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
