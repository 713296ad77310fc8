pub mod art;
pub mod camp;
pub mod event;
pub mod search;
pub mod street;
pub mod user;
pub mod write;
pub mod year;

use playa_core::error::CoreError;
use playa_db::models::year::Year;
use playa_db::repositories::YearRepo;
use playa_db::DbPool;

use crate::error::AppError;

/// Resolve a path year label (e.g. `"2012"`) to its row, or 404.
pub(crate) async fn resolve_year(pool: &DbPool, label: &str) -> Result<Year, AppError> {
    YearRepo::find_by_label(pool, label)
        .await?
        .ok_or_else(|| CoreError::not_found("Year", label).into())
}
