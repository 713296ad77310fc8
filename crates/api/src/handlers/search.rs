//! Handler for full-text event search.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use playa_core::error::CoreError;
use playa_db::repositories::SearchRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::event::assemble_event_details;
use crate::handlers::resolve_year;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `/search`.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Search terms, required and non-empty.
    pub q: Option<String>,
    /// Year label to scope the search; absent or `"all"` searches every
    /// year.
    pub year: Option<String>,
}

/// GET /api/v1/search?q=&year=
///
/// Full-text search over publicly visible events and their occurrence
/// notes.
pub async fn search_events(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let terms = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("Missing search terms".into()))?;

    let records = match params.year.as_deref() {
        None | Some("all") => SearchRepo::search_events(&state.pool, terms).await?,
        Some(label) => {
            let year = resolve_year(&state.pool, label).await?;
            SearchRepo::search_events_for_year(&state.pool, year.id, terms).await?
        }
    };

    let data = assemble_event_details(&state.pool, records).await?;

    Ok(Json(DataResponse { data }))
}
