//! Handlers for the year catalog.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use playa_db::models::year::{YearDetail, YearSummary};
use playa_db::repositories::YearRepo;

use crate::error::AppResult;
use crate::handlers::resolve_year;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/years
///
/// List all years, oldest first.
pub async fn list_years(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let years = YearRepo::list(&state.pool).await?;
    let data: Vec<YearSummary> = years.into_iter().map(YearSummary::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}
///
/// Retrieve a single year by its label, with the derived event-day
/// sequence.
pub async fn get_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;

    Ok(Json(DataResponse {
        data: YearDetail::from(row),
    }))
}
