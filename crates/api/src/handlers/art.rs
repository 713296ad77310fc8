//! Handlers for the art installation catalog (read-only).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use playa_core::types::DbId;
use playa_db::models::art::ArtDetail;
use playa_db::repositories::ArtRepo;

use crate::error::AppResult;
use crate::handlers::resolve_year;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/art
///
/// List every installation across all years.
pub async fn list_art(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ArtRepo::list(&state.pool).await?;
    let data: Vec<ArtDetail> = rows.into_iter().map(ArtDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/art
///
/// List one year's installations.
pub async fn list_art_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let rows = ArtRepo::list_for_year(&state.pool, row.id).await?;
    let data: Vec<ArtDetail> = rows.into_iter().map(ArtDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/art/{id}
///
/// The zero-or-one installation with the given id. An id outside the
/// year answers 200 with an empty list, matching the listing shape.
pub async fn get_art(
    State(state): State<AppState>,
    Path((year, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let found = ArtRepo::find_in_year(&state.pool, row.id, id).await?;
    let data: Vec<ArtDetail> = found.into_iter().map(ArtDetail::from).collect();

    Ok(Json(DataResponse { data }))
}
