//! Repository-level tests for the two visibility conventions: camps use
//! `list_online` + soft `deleted`, events use `moderation` +
//! `list_online`. Public accessors must never leak hidden rows; the
//! "any" lookups must still find them.

mod common;

use common::{seed_camp, seed_event, seed_occurrence, seed_user, seed_year, ts};
use playa_db::repositories::{CampRepo, EventRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Theme camps
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn hidden_camp_is_absent_from_public_listings(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;

    seed_camp(&pool, year.id, user.id, "Visible Camp", true).await;
    let hidden = seed_camp(&pool, year.id, user.id, "Hidden Camp", false).await;

    let listed = CampRepo::list_public_for_year(&pool, year.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Visible Camp");

    // The by-id public lookup resolves to nothing, not an error.
    let found = CampRepo::find_public_in_year(&pool, year.id, hidden)
        .await
        .unwrap();
    assert!(found.is_none());

    // The unfiltered lookup still reaches it.
    let any = CampRepo::find_by_id_any(&pool, hidden).await.unwrap();
    assert_eq!(any.unwrap().name, "Hidden Camp");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn soft_deleted_camp_disappears_but_keeps_its_row(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;
    let camp = seed_camp(&pool, year.id, user.id, "Camp Ephemera", true).await;

    assert!(CampRepo::mark_deleted(&pool, camp).await.unwrap());

    let listed = CampRepo::list_public_for_year(&pool, year.id).await.unwrap();
    assert!(listed.is_empty());

    let row = CampRepo::find_by_id_any(&pool, camp).await.unwrap().unwrap();
    assert!(row.deleted);
    assert!(row.list_online, "deletion must not touch the visibility flag");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_deleted_reports_missing_rows(pool: PgPool) {
    assert!(!CampRepo::mark_deleted(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Playa events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn only_accepted_visible_events_are_public(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;

    let accepted = seed_event(&pool, year.id, user.id, "Accepted", "A", true).await;
    seed_event(&pool, year.id, user.id, "Unmoderated", "U", true).await;
    seed_event(&pool, year.id, user.id, "Rejected", "R", true).await;
    seed_event(&pool, year.id, user.id, "Delisted", "A", false).await;

    let listed = EventRepo::list_public_for_year(&pool, year.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, accepted);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejecting_an_event_hides_it_without_deleting(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;
    let event = seed_event(&pool, year.id, user.id, "Doomed", "A", true).await;

    assert!(EventRepo::reject(&pool, event).await.unwrap());

    let found = EventRepo::find_public_in_year(&pool, year.id, event)
        .await
        .unwrap();
    assert!(found.is_none());

    let row = EventRepo::find_by_id_any(&pool, event).await.unwrap().unwrap();
    assert_eq!(row.moderation, "R");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn window_query_keeps_year_and_visibility_filters(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let other_year = seed_year(&pool, "2013").await;
    let user = seed_user(&pool, "burner", true).await;

    let in_window = seed_event(&pool, year.id, user.id, "Morning", "A", true).await;
    let late = seed_event(&pool, year.id, user.id, "Night", "A", true).await;
    let hidden = seed_event(&pool, year.id, user.id, "Hidden", "U", true).await;
    let elsewhere = seed_event(&pool, other_year.id, user.id, "Elsewhere", "A", true).await;

    seed_occurrence(&pool, in_window, ts(2012, 8, 28, 8), ts(2012, 8, 28, 10), "").await;
    seed_occurrence(&pool, late, ts(2012, 8, 30, 22), ts(2012, 8, 30, 23), "").await;
    seed_occurrence(&pool, hidden, ts(2012, 8, 28, 8), ts(2012, 8, 28, 10), "").await;
    seed_occurrence(&pool, elsewhere, ts(2012, 8, 28, 8), ts(2012, 8, 28, 10), "").await;

    let listed = EventRepo::list_public_for_year_in_window(
        &pool,
        year.id,
        Some(ts(2012, 8, 28, 0)),
        Some(ts(2012, 8, 29, 0)),
    )
    .await
    .unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, in_window);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn window_query_with_one_bound(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;

    let early = seed_event(&pool, year.id, user.id, "Early", "A", true).await;
    let late = seed_event(&pool, year.id, user.id, "Late", "A", true).await;

    seed_occurrence(&pool, early, ts(2012, 8, 27, 8), ts(2012, 8, 27, 9), "").await;
    seed_occurrence(&pool, late, ts(2012, 8, 31, 8), ts(2012, 8, 31, 9), "").await;

    // Only a lower bound: everything starting at or after it matches.
    let listed = EventRepo::list_public_for_year_in_window(
        &pool,
        year.id,
        Some(ts(2012, 8, 30, 0)),
        None,
    )
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, late);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_leaves_absent_fields_untouched(pool: PgPool) {
    let year = seed_year(&pool, "2012").await;
    let user = seed_user(&pool, "burner", true).await;
    let event = seed_event(&pool, year.id, user.id, "Original Title", "A", true).await;

    let changes = playa_db::models::event::EventChanges {
        description: Some("Now with a description".to_string()),
        ..Default::default()
    };
    let row = EventRepo::update(&pool, event, &changes).await.unwrap().unwrap();

    assert_eq!(row.title, "Original Title");
    assert_eq!(row.description, "Now with a description");
    assert_eq!(row.moderation, "A");
}
