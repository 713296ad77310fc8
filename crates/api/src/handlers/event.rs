//! Handlers for the playa event resource.
//!
//! The moderated centerpiece: public reads only see accepted, visible
//! events; writes run the shared pipeline and a delete transitions the
//! event to rejected rather than removing it. Listing responses embed
//! the event's occurrence times.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use playa_core::cache::cache_key;
use playa_core::coerce::coerce_bool;
use playa_core::error::CoreError;
use playa_core::moderation::parse_moderation;
use playa_core::types::DbId;
use playa_db::models::event::{
    EventChanges, EventDetail, EventRecord, EventWindow, EventWriteRequest,
};
use playa_db::models::event_type::DEFAULT_EVENT_TYPE_ID;
use playa_db::models::occurrence::OccurrenceTime;
use playa_db::repositories::{ArtRepo, CampRepo, EventRepo, EventTypeRepo, OccurrenceRepo};
use playa_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_year;
use crate::handlers::write::{require_api_user, WriteMode};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, DeleteAck, WriteAck};
use crate::state::AppState;

/// Attach occurrence times to joined event records, one batch query for
/// the whole listing.
pub(crate) async fn assemble_event_details(
    pool: &DbPool,
    records: Vec<EventRecord>,
) -> Result<Vec<EventDetail>, sqlx::Error> {
    let ids: Vec<DbId> = records.iter().map(|r| r.id).collect();
    let occurrences = OccurrenceRepo::list_for_events(pool, &ids).await?;

    let mut by_event: HashMap<DbId, Vec<OccurrenceTime>> = HashMap::new();
    for o in occurrences {
        by_event.entry(o.event_id).or_default().push(OccurrenceTime {
            start_time: o.start_time,
            end_time: o.end_time,
        });
    }

    Ok(records
        .into_iter()
        .map(|r| {
            let set = by_event.remove(&r.id).unwrap_or_default();
            EventDetail::from_record(r, set)
        })
        .collect())
}

/// Load publicly visible events, optionally scoped to a year.
async fn load_public_events(
    pool: &DbPool,
    year_id: Option<DbId>,
) -> Result<Vec<EventDetail>, sqlx::Error> {
    let records = match year_id {
        Some(year_id) => EventRepo::list_public_for_year(pool, year_id).await?,
        None => EventRepo::list_public(pool).await?,
    };
    assemble_event_details(pool, records).await
}

/// GET /api/v1/events
///
/// List all publicly visible events. Served from the listing cache; a
/// stored entry is returned unchanged for the TTL window.
pub async fn list_events(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let key = cache_key("event", &[]);
    let pool = state.pool.clone();
    let data: Vec<EventDetail> = state
        .listing_cache
        .get_or_compute(&key, || async move { load_public_events(&pool, None).await })
        .await?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/events?start_time=&end_time=
///
/// List one year's publicly visible events. Without time bounds the
/// response comes from the listing cache; a bounded window always hits
/// the database.
pub async fn list_events_for_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(window): Query<EventWindow>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;

    if window.is_unbounded() {
        let key = cache_key("event", &[("year", &year)]);
        let pool = state.pool.clone();
        let data: Vec<EventDetail> = state
            .listing_cache
            .get_or_compute(&key, || async move {
                load_public_events(&pool, Some(row.id)).await
            })
            .await?;
        return Ok(Json(DataResponse { data }));
    }

    let records = EventRepo::list_public_for_year_in_window(
        &state.pool,
        row.id,
        window.start_time,
        window.end_time,
    )
    .await?;
    let data = assemble_event_details(&state.pool, records).await?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/years/{year}/events/{id}
///
/// The zero-or-one publicly visible event with the given id. Hidden and
/// rejected events answer 200 with an empty list, matching the listing
/// shape.
pub async fn get_event(
    State(state): State<AppState>,
    Path((year, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    let row = resolve_year(&state.pool, &year).await?;
    let found = EventRepo::find_public_in_year(&state.pool, row.id, id).await?;
    let records: Vec<EventRecord> = found.into_iter().collect();
    let data = assemble_event_details(&state.pool, records).await?;

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/years/{year}/events
///
/// Create an event (authenticated, API-allowed actors only). New events
/// start unmoderated unless the request carries a valid moderation
/// letter.
pub async fn create_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path(year): Path<String>,
    Json(req): Json<EventWriteRequest>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;
    let pk = create_or_update(&state, user.user_id, year, WriteMode::Create, req).await?;

    tracing::info!(event_id = pk, user_id = user.user_id, "Playa event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: WriteAck { pk } })))
}

/// PUT /api/v1/years/{year}/events/{id}
///
/// Update an event (authenticated, API-allowed actors only).
pub async fn update_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path((year, id)): Path<(String, DbId)>,
    Json(req): Json<EventWriteRequest>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;
    let pk = create_or_update(&state, user.user_id, year, WriteMode::Update(id), req).await?;

    tracing::info!(event_id = pk, user_id = user.user_id, "Playa event updated");

    Ok(Json(DataResponse { data: WriteAck { pk } }))
}

/// DELETE /api/v1/years/{year}/events/{id}
///
/// Reject an event. The row stays in place with `moderation` set to
/// 'R', so it vanishes from public paths but remains reachable for
/// privileged lookups.
pub async fn delete_event(
    user: AuthUser,
    State(state): State<AppState>,
    Path((_year, id)): Path<(String, DbId)>,
) -> AppResult<impl IntoResponse> {
    require_api_user(&state.pool, user.user_id).await?;

    let rejected = EventRepo::reject(&state.pool, id).await?;
    if !rejected {
        return Err(CoreError::not_found("PlayaEvent", id).into());
    }

    tracing::info!(event_id = id, user_id = user.user_id, "Playa event rejected");

    Ok(Json(DataResponse {
        data: DeleteAck {
            pk: id,
            message: "Event rejected",
        },
    }))
}

/// The shared create-or-update pipeline for events.
///
/// The path year fills an absent `year` field before the emptiness
/// check. On update the year and event type are immutable: the stored
/// values win and incoming ones are discarded.
async fn create_or_update(
    state: &AppState,
    actor_id: DbId,
    path_year: String,
    mode: WriteMode,
    mut req: EventWriteRequest,
) -> Result<DbId, AppError> {
    if req.year.is_none() {
        req.year = Some(path_year);
    }
    if req.is_empty() {
        return Err(CoreError::Validation("Missing critical information".into()).into());
    }

    match mode {
        WriteMode::Create => {
            // The event type is checked before the year, so when both
            // are invalid the response names the type.
            let event_type_id = match req.event_type.as_deref() {
                None => DEFAULT_EVENT_TYPE_ID,
                Some(abbr) => {
                    EventTypeRepo::find_by_abbr(&state.pool, abbr)
                        .await?
                        .ok_or_else(|| CoreError::not_found("EventType", abbr))?
                        .id
                }
            };

            let label = req.year.clone().unwrap_or_default();
            let year = resolve_year(&state.pool, &label).await?;

            let changes = resolve_event_changes(&state.pool, &req).await?;
            let row = EventRepo::insert(&state.pool, year.id, event_type_id, actor_id, &changes)
                .await?;
            Ok(row.id)
        }
        WriteMode::Update(id) => {
            EventRepo::find_by_id_any(&state.pool, id)
                .await?
                .ok_or_else(|| CoreError::not_found("PlayaEvent", id))?;

            if let Some(abbr) = req.event_type.as_deref() {
                tracing::warn!(event_id = id, abbr, "Ignoring event_type on update");
            }

            let changes = resolve_event_changes(&state.pool, &req).await?;
            let row = EventRepo::update(&state.pool, id, &changes)
                .await?
                .ok_or_else(|| CoreError::not_found("PlayaEvent", id))?;
            Ok(row.id)
        }
    }
}

/// Resolve a write request into typed changes.
///
/// Camp and art references are checked independently; any miss aborts
/// the whole write, naming the field's entity and the missing id. An
/// unrecognized moderation value is ignored with a warning rather than
/// failing the write.
async fn resolve_event_changes(
    pool: &DbPool,
    req: &EventWriteRequest,
) -> Result<EventChanges, AppError> {
    let mut changes = EventChanges {
        title: req.title.clone(),
        description: req.description.clone(),
        print_description: req.print_description.clone(),
        slug: req.slug.clone(),
        url: req.url.clone(),
        contact_email: req.contact_email.clone(),
        other_location: req.other_location.clone(),
        hosted_by_camp_id: None,
        located_at_art_id: None,
        moderation: None,
        check_location: req.check_location.as_deref().map(coerce_bool),
        all_day: req.all_day.as_deref().map(coerce_bool),
        list_online: req.list_online.as_deref().map(coerce_bool),
        list_contact_online: req.list_contact_online.as_deref().map(coerce_bool),
        speaker_series: req.speaker_series.as_deref().map(coerce_bool),
        password: req.password.clone(),
        password_hint: req.password_hint.clone(),
    };

    if let Some(id) = req.hosted_by_camp {
        CampRepo::find_by_id_any(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("ThemeCamp", id))?;
        changes.hosted_by_camp_id = Some(id);
    }
    if let Some(id) = req.located_at_art {
        ArtRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| CoreError::not_found("ArtInstallation", id))?;
        changes.located_at_art_id = Some(id);
    }

    if let Some(raw) = req.moderation.as_deref() {
        match parse_moderation(raw) {
            Some(state) => changes.moderation = Some(state.to_string()),
            None => {
                tracing::warn!(value = raw, "Ignoring unrecognized moderation state");
            }
        }
    }

    Ok(changes)
}
