//! Repository for the `years` table.

use sqlx::PgPool;

use crate::models::year::{CreateYear, Year};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, year, location, participants, theme, notes, event_start, event_end";

/// Provides read access (plus bootstrap inserts) for years.
pub struct YearRepo;

impl YearRepo {
    /// List all years, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Year>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM years ORDER BY year ASC");
        sqlx::query_as::<_, Year>(&query).fetch_all(pool).await
    }

    /// Find a year by its label (e.g. `"2012"`).
    pub async fn find_by_label(pool: &PgPool, label: &str) -> Result<Option<Year>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM years WHERE year = $1");
        sqlx::query_as::<_, Year>(&query)
            .bind(label)
            .fetch_optional(pool)
            .await
    }

    /// Insert a year. Admin/bootstrap path; not exposed via the API.
    pub async fn create(pool: &PgPool, input: &CreateYear) -> Result<Year, sqlx::Error> {
        let query = format!(
            "INSERT INTO years (year, location, participants, theme, notes, event_start, event_end)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Year>(&query)
            .bind(&input.year)
            .bind(&input.location)
            .bind(input.participants)
            .bind(&input.theme)
            .bind(&input.notes)
            .bind(input.event_start)
            .bind(input.event_end)
            .fetch_one(pool)
            .await
    }
}
