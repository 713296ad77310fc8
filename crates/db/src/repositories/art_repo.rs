//! Repository for the `art_installations` table. Read-only via the API.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::art::{ArtInstallation, CreateArtInstallation};

/// Joined select shared by art queries.
const ART_SELECT: &str = "SELECT ai.id, ai.year_id, y.year AS year_label, ai.name, ai.slug, \
        ai.artist, ai.description, ai.url, ai.contact_email, \
        ai.circular_street_id, ai.time_address, ai.distance, \
        ai.location_string, ai.bm_fm_id \
     FROM art_installations ai \
     JOIN years y ON y.id = ai.year_id";

/// Provides read access for art installations.
pub struct ArtRepo;

impl ArtRepo {
    /// List all installations, ordered by (year, name).
    pub async fn list(pool: &PgPool) -> Result<Vec<ArtInstallation>, sqlx::Error> {
        let query = format!("{ART_SELECT} ORDER BY y.year ASC, ai.name ASC");
        sqlx::query_as::<_, ArtInstallation>(&query)
            .fetch_all(pool)
            .await
    }

    /// List one year's installations, ordered by name.
    pub async fn list_for_year(
        pool: &PgPool,
        year_id: DbId,
    ) -> Result<Vec<ArtInstallation>, sqlx::Error> {
        let query = format!("{ART_SELECT} WHERE ai.year_id = $1 ORDER BY ai.name ASC");
        sqlx::query_as::<_, ArtInstallation>(&query)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }

    /// The zero-or-one installation with the given id inside a year.
    pub async fn find_in_year(
        pool: &PgPool,
        year_id: DbId,
        id: DbId,
    ) -> Result<Option<ArtInstallation>, sqlx::Error> {
        let query = format!("{ART_SELECT} WHERE ai.year_id = $1 AND ai.id = $2");
        sqlx::query_as::<_, ArtInstallation>(&query)
            .bind(year_id)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an installation by primary key (FK resolution).
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArtInstallation>, sqlx::Error> {
        let query = format!("{ART_SELECT} WHERE ai.id = $1");
        sqlx::query_as::<_, ArtInstallation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an installation. Admin/bootstrap path.
    pub async fn create(
        pool: &PgPool,
        input: &CreateArtInstallation,
    ) -> Result<ArtInstallation, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO art_installations
                (year_id, name, slug, artist, description, url, contact_email,
                 circular_street_id, time_address)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(input.year_id)
        .bind(&input.name)
        .bind(&input.slug)
        .bind(&input.artist)
        .bind(&input.description)
        .bind(&input.url)
        .bind(&input.contact_email)
        .bind(input.circular_street_id)
        .bind(input.time_address)
        .fetch_one(pool)
        .await?;

        let query = format!("{ART_SELECT} WHERE ai.id = $1");
        sqlx::query_as::<_, ArtInstallation>(&query)
            .bind(row.0)
            .fetch_one(pool)
            .await
    }
}
