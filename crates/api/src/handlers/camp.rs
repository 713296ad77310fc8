//! Handlers for the theme camp resource.
//!
//! Reads go through the public repository mode (hidden and soft-deleted
//! camps are invisible) and the listing cache. Writes run the shared
//! pipeline: actor check, year injection, emptiness check, reference
//! resolution, then a single INSERT or UPDATE.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use playa_core::cache::cache_key;
use playa_core::coerce::coerce_bool;
use playa_core::error::CoreError;
use playa_core::types::DbId;
use playa_db::models::camp::{CampChanges, CampDetail, CampWriteRequest};
use playa_db::repositories::{CampRepo, CircularStreetRepo, TimeStreetRepo};
use playa_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_year;
use crate::handlers::write::{require_api_user, WriteMode};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, DeleteAck, WriteAck};
use crate::state::AppState;

/// Load publicly visible camps, optionally scoped to a year.
async fn load_public_camps(
    pool: &DbPool,
    year_id: Option<DbId>,
) -> Result<Vec<CampDetail>, sqlx::Error> {
    let rows = match year_id {
        Some(year_id) => CampRepo::list_public_for_year(pool, year_id).await?,
        None => CampRepo::list_public(pool).await?,
    };
    Ok(rows.into_iter().map(CampDetail::from).collect())
}

/// GET /api/v1/camps
///
/// List all publicly visible camps. Served from the listing cache; a
/// stored entry is returned unchanged for the TTL window.
pub async fn list_camps(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let key = cache_key("camp", &[]);
    let pool = state.pool.clone();
    let data: Vec<CampDetail> = state
        .listing_cache
        .get_or_compute(&key, || async move { load_public_camps(&pool, None).await })
        .await?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/camps
///
/// List one year's publicly visible camps, from the listing cache.
pub async fn list_camps_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;

    let key = cache_key("camp", &[("year", &year)]);
    let pool = state.pool.clone();
    let data: Vec<CampDetail> = state
        .listing_cache
        .get_or_compute(&key, || async move {
            load_public_camps(&pool, Some(row.id)).await
        })
        .await?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/camps/{id}
///
/// The zero-or-one publicly visible camp with the given id. Hidden and
/// soft-deleted camps answer 200 with an empty list, matching the
/// listing shape.
pub async fn get_camp(
    State(state): State<AppState>,
    Path((year, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let found = CampRepo::find_public_in_year(&state.pool, row.id, id).await?;
    let data: Vec<CampDetail> = found.into_iter().map(CampDetail::from).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/years/{year}/camps
///
/// Create a camp (authenticated, API-allowed actors only).
pub async fn create_camp(
    user: AuthUser,
    State(state): State<AppState>,
    Path(year): Path<String>,
    Json(req): Json<CampWriteRequest>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;
    let pk = create_or_update(&state, user.user_id, year, WriteMode::Create, req).await?;

    tracing::info!(camp_id = pk, user_id = user.user_id, "Theme camp created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: WriteAck { pk } })))
}

/// PUT /api/v1/years/{year}/camps/{id}
///
/// Update a camp (authenticated, API-allowed actors only).
pub async fn update_camp(
    user: AuthUser,
    State(state): State<AppState>,
    Path((year, id)): Path<(String, DbId)>,
    Json(req): Json<CampWriteRequest>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;
    let pk = create_or_update(&state, user.user_id, year, WriteMode::Update(id), req).await?;

    tracing::info!(camp_id = pk, user_id = user.user_id, "Theme camp updated");

    Ok(Json(DataResponse { data: WriteAck { pk } }))
}

/// DELETE /api/v1/years/{year}/camps/{id}
///
/// Soft-delete a camp. The row stays in place with `deleted` set, so it
/// vanishes from public paths but remains reachable for privileged
/// lookups.
pub async fn delete_camp(
    user: AuthUser,
    State(state): State<AppState>,
    Path((_year, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;

    let marked = CampRepo::mark_deleted(&state.pool, id).await?;
    if !marked {
        return Err(CoreError::not_found("ThemeCamp", id).into());
    }

    tracing::info!(camp_id = id, user_id = user.user_id, "Theme camp deleted");

    Ok(Json(DataResponse {
        data: DeleteAck {
            pk: id,
            message: "Theme camp deleted",
        },
    }))
}

/// The shared create-or-update pipeline for camps.
///
/// The path year fills an absent `year` field before the emptiness
/// check. On update the year is immutable: the stored value wins and
/// any incoming label is discarded.
async fn create_or_update(
    state: &AppState,
    actor_id: DbId,
    path_year: String,
    mode: WriteMode,
    mut req: CampWriteRequest,
) -> Result<DbId, AppError> {
    if req.year.is_none() {
        req.year = Some(path_year);
    }
    if req.is_empty() {
        return Err(CoreError::Validation("Missing critical information".into()).into());
    }

    match mode {
        WriteMode::Create => {
            let label = req.year.clone().unwrap_or_default();
            let year = resolve_year(&state.pool, &label).await?;
            let changes = resolve_camp_changes(&state.pool, &req).await?;
            let row = CampRepo::insert(&state.pool, year.id, actor_id, &changes).await?;
            Ok(row.id)
        }
        WriteMode::Update(id) => {
            CampRepo::find_by_id_any(&state.pool, id)
                .await?
                .ok_or_else(|| CoreError::not_found("ThemeCamp", id))?;
            let changes = resolve_camp_changes(&state.pool, &req).await?;
            let row = CampRepo::update(&state.pool, id, &changes)
                .await?
                .ok_or_else(|| CoreError::not_found("ThemeCamp", id))?;
            Ok(row.id)
        }
    }
}

/// Resolve a write request into typed changes.
///
/// Each street reference is checked independently; any miss aborts the
/// whole write, naming the field's entity and the missing id.
async fn resolve_camp_changes(
    pool: &DbPool,
    req: &CampWriteRequest,
) -> Result<CampChanges, AppError> {
    let mut changes = CampChanges {
        name: req.name.clone(),
        slug: req.slug.clone(),
        description: req.description.clone(),
        url: req.url.clone(),
        contact_email: req.contact_email.clone(),
        hometown: req.hometown.clone(),
        location_string: req.location_string.clone(),
        circular_street_id: None,
        time_street_id: None,
        list_online: req.list_online.as_deref().map(coerce_bool),
    };

    if let Some(id) = req.circular_street {
        CircularStreetRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("CircularStreet", id))?;
        changes.circular_street_id = Some(id);
    }
    if let Some(id) = req.time_street {
        TimeStreetRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("TimeStreet", id))?;
        changes.time_street_id = Some(id);
    }

    Ok(changes)
}
