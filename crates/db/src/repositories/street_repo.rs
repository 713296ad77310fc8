//! Repositories for the `circular_streets` and `time_streets` tables.
//! Both are read-only via the API; inserts exist for bootstrap/tests.

use playa_core::types::DbId;
use sqlx::PgPool;

use crate::models::street::{
    CircularStreet, CreateCircularStreet, CreateTimeStreet, TimeStreet,
};

/// Joined select shared by circular street queries.
const CSTREET_SELECT: &str = "SELECT cs.id, cs.year_id, y.year AS year_label, cs.name, \
        cs.sort_order, cs.width, cs.distance_from_center \
     FROM circular_streets cs \
     JOIN years y ON y.id = cs.year_id";

/// Joined select shared by time street queries.
const TSTREET_SELECT: &str = "SELECT ts.id, ts.year_id, y.year AS year_label, ts.hour, \
        ts.minute, ts.name, ts.width \
     FROM time_streets ts \
     JOIN years y ON y.id = ts.year_id";

/// Provides read access for circular streets.
pub struct CircularStreetRepo;

impl CircularStreetRepo {
    /// List all circular streets, ordered by (year, order).
    pub async fn list(pool: &PgPool) -> Result<Vec<CircularStreet>, sqlx::Error> {
        let query = format!("{CSTREET_SELECT} ORDER BY y.year ASC, cs.sort_order ASC");
        sqlx::query_as::<_, CircularStreet>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the circular streets of one year, ordered by order.
    pub async fn list_for_year(
        pool: &PgPool,
        year_id: DbId,
    ) -> Result<Vec<CircularStreet>, sqlx::Error> {
        let query = format!("{CSTREET_SELECT} WHERE cs.year_id = $1 ORDER BY cs.sort_order ASC");
        sqlx::query_as::<_, CircularStreet>(&query)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }

    /// Find a circular street by primary key (FK resolution).
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CircularStreet>, sqlx::Error> {
        let query = format!("{CSTREET_SELECT} WHERE cs.id = $1");
        sqlx::query_as::<_, CircularStreet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a circular street. Admin/bootstrap path.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCircularStreet,
    ) -> Result<CircularStreet, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO circular_streets (year_id, name, sort_order, width, distance_from_center)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.year_id)
        .bind(&input.name)
        .bind(input.sort_order)
        .bind(input.width)
        .bind(input.distance_from_center)
        .fetch_one(pool)
        .await?;

        let query = format!("{CSTREET_SELECT} WHERE cs.id = $1");
        sqlx::query_as::<_, CircularStreet>(&query)
            .bind(row.0)
            .fetch_one(pool)
            .await
    }
}

/// Provides read access for time streets.
pub struct TimeStreetRepo;

impl TimeStreetRepo {
    /// List all time streets, ordered by (year, name).
    pub async fn list(pool: &PgPool) -> Result<Vec<TimeStreet>, sqlx::Error> {
        let query = format!("{TSTREET_SELECT} ORDER BY y.year ASC, ts.name ASC");
        sqlx::query_as::<_, TimeStreet>(&query).fetch_all(pool).await
    }

    /// List the time streets of one year, ordered by name.
    pub async fn list_for_year(
        pool: &PgPool,
        year_id: DbId,
    ) -> Result<Vec<TimeStreet>, sqlx::Error> {
        let query = format!("{TSTREET_SELECT} WHERE ts.year_id = $1 ORDER BY ts.name ASC");
        sqlx::query_as::<_, TimeStreet>(&query)
            .bind(year_id)
            .fetch_all(pool)
            .await
    }

    /// Find a time street by primary key (FK resolution).
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TimeStreet>, sqlx::Error> {
        let query = format!("{TSTREET_SELECT} WHERE ts.id = $1");
        sqlx::query_as::<_, TimeStreet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a time street. Admin/bootstrap path.
    pub async fn create(pool: &PgPool, input: &CreateTimeStreet) -> Result<TimeStreet, sqlx::Error> {
        let row: (DbId,) = sqlx::query_as(
            "INSERT INTO time_streets (year_id, hour, minute, name, width)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(input.year_id)
        .bind(input.hour)
        .bind(input.minute)
        .bind(&input.name)
        .bind(input.width)
        .fetch_one(pool)
        .await?;

        let query = format!("{TSTREET_SELECT} WHERE ts.id = $1");
        sqlx::query_as::<_, TimeStreet>(&query)
            .bind(row.0)
            .fetch_one(pool)
            .await
    }
}
