//! Repository for the `theme_camps` table.
//!
//! Two access modes: the public mode filters `list_online = TRUE AND
//! deleted = FALSE`; the "any" mode is unfiltered and reserved for the
//! write path and privileged lookups.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::camp::{CampChanges, CampRecord, ThemeCamp};

/// Bare table columns, for the write-path shape.
const CAMP_COLUMNS: &str = "id, year_id, name, slug, description, url, contact_email, \
     hometown, location_string, list_online, circular_street_id, \
     time_street_id, time_address, bm_fm_id, deleted, creator_id";

/// Joined select for the read-path shape.
const CAMP_SELECT: &str = "SELECT tc.id, tc.year_id, y.year AS year_label, tc.name, tc.slug, \
        tc.description, tc.url, tc.contact_email, tc.hometown, \
        tc.location_string, tc.circular_street_id, tc.time_street_id, \
        tc.time_address \
     FROM theme_camps tc \
     JOIN years y ON y.id = tc.year_id";

/// Visibility filter baked into every public accessor.
const PUBLIC: &str = "tc.list_online = TRUE AND tc.deleted = FALSE";

/// Provides data access for theme camps.
pub struct CampRepo;

impl CampRepo {
    /// List all publicly visible camps, ordered by (year, name).
    pub async fn list_public(pool: &PgPool) -> Result<Vec<CampRecord>, sqlx::Error> {
        let query = format!("{CAMP_SELECT} WHERE {PUBLIC} ORDER BY y.year ASC, tc.name ASC");
        sqlx::query_as::<_, CampRecord>(&query).fetch_all(pool).await
    }

    /// List one year's publicly visible camps, ordered by name.
    pub async fn list_public_for_year(
        pool: &PgPool,
        year_id: DbId,
    ) -> Result<Vec<CampRecord>, sqlx::Error> {
        let query =
            format!("{CAMP_SELECT} WHERE tc.year_id = $1 AND {PUBLIC} ORDER BY tc.name ASC");
        sqlx::query_as::<_, CampRecord>(&query)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }

    /// The zero-or-one publicly visible camp with the given id inside a
    /// year. A hidden or deleted camp resolves to `None`, not an error.
    pub async fn find_public_in_year(
        pool: &PgPool,
        year_id: DbId,
        id: DbId,
    ) -> Result<Option<CampRecord>, sqlx::Error> {
        let query = format!("{CAMP_SELECT} WHERE tc.year_id = $1 AND tc.id = $2 AND {PUBLIC}");
        sqlx::query_as::<_, CampRecord>(&query)
            .bind(year_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a camp by primary key regardless of visibility (write path).
    pub async fn find_by_id_any(pool: &PgPool, id: DbId) -> Result<Option<ThemeCamp>, sqlx::Error> {
        let query = format!("SELECT {CAMP_COLUMNS} FROM theme_camps WHERE id = $1");
        sqlx::query_as::<_, ThemeCamp>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a camp with the given resolved changes.
    ///
    /// Absent fields fall back to the column defaults (`list_online`
    /// defaults to visible).
    pub async fn insert(
        pool: &PgPool,
        year_id: DbId,
        creator_id: DbId,
        changes: &CampChanges,
    ) -> Result<ThemeCamp, sqlx::Error> {
        let query = format!(
            "INSERT INTO theme_camps
                (year_id, creator_id, name, slug, description, url, contact_email,
                 hometown, location_string, circular_street_id, time_street_id,
                 list_online)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, $6, $7, $8, $9, $10, $11,
                     COALESCE($12, TRUE))
             RETURNING {CAMP_COLUMNS}"
        );
        sqlx::query_as::<_, ThemeCamp>(&query)
            .bind(year_id)
            .bind(creator_id)
            .bind(&changes.name)
            .bind(&changes.slug)
            .bind(&changes.description)
            .bind(&changes.url)
            .bind(&changes.contact_email)
            .bind(&changes.hometown)
            .bind(&changes.location_string)
            .bind(changes.circular_street_id)
            .bind(changes.time_street_id)
            .bind(changes.list_online)
            .fetch_one(pool)
            .await
    }

    /// Apply resolved changes to an existing camp. `None` fields keep the
    /// stored value. The year is never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &CampChanges,
    ) -> Result<Option<ThemeCamp>, sqlx::Error> {
        let query = format!(
            "UPDATE theme_camps SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                url = COALESCE($5, url),
                contact_email = COALESCE($6, contact_email),
                hometown = COALESCE($7, hometown),
                location_string = COALESCE($8, location_string),
                circular_street_id = COALESCE($9, circular_street_id),
                time_street_id = COALESCE($10, time_street_id),
                list_online = COALESCE($11, list_online)
             WHERE id = $1
             RETURNING {CAMP_COLUMNS}"
        );
        sqlx::query_as::<_, ThemeCamp>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(&changes.slug)
            .bind(&changes.description)
            .bind(&changes.url)
            .bind(&changes.contact_email)
            .bind(&changes.hometown)
            .bind(&changes.location_string)
            .bind(changes.circular_street_id)
            .bind(changes.time_street_id)
            .bind(changes.list_online)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a camp. Returns `true` if a row was marked.
    ///
    /// The row stays resolvable through [`CampRepo::find_by_id_any`].
    pub async fn mark_deleted(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE theme_camps SET deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
