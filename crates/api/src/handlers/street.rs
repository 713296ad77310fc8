//! Handlers for the circular and time street references.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use playa_db::models::street::{CircularStreetDetail, TimeStreetDetail};
use playa_db::repositories::{CircularStreetRepo, TimeStreetRepo};

use crate::error::AppResult;
use crate::handlers::resolve_year;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cstreets
///
/// List every circular street across all years.
pub async fn list_cstreets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let streets = CircularStreetRepo::list(&state.pool).await?;
    let data: Vec<CircularStreetDetail> =
        streets.into_iter().map(CircularStreetDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/cstreets
///
/// List one year's circular streets.
pub async fn list_cstreets_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let streets = CircularStreetRepo::list_for_year(&state.pool, row.id).await?;
    let data: Vec<CircularStreetDetail> =
        streets.into_iter().map(CircularStreetDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tstreets
///
/// List every time street across all years.
pub async fn list_tstreets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let streets = TimeStreetRepo::list(&state.pool).await?;
    let data: Vec<TimeStreetDetail> = streets.into_iter().map(TimeStreetDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/tstreets
///
/// List one year's time streets.
pub async fn list_tstreets_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let streets = TimeStreetRepo::list_for_year(&state.pool, row.id).await?;
    let data: Vec<TimeStreetDetail> = streets.into_iter().map(TimeStreetDetail::from).collect();

    Ok(Json(DataResponse { data }))
}
