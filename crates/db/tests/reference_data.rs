//! Tests for the seeded `event_types` reference data.

use playa_db::models::event_type::DEFAULT_EVENT_TYPE_ID;
use playa_db::repositories::EventTypeRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_types_are_seeded_with_the_default_first(pool: PgPool) {
    let types = EventTypeRepo::list(&pool).await.unwrap();
    assert_eq!(types.len(), 10);
    assert_eq!(types[0].id, DEFAULT_EVENT_TYPE_ID);
    assert_eq!(types[0].abbr, "NON");

    let default = EventTypeRepo::find_by_id(&pool, DEFAULT_EVENT_TYPE_ID)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(default.label, "None");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_type_lookup_by_abbreviation(pool: PgPool) {
    let workshop = EventTypeRepo::find_by_abbr(&pool, "WS")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(workshop.id, 2);
    assert_eq!(workshop.label, "Workshop");

    // Abbreviations are matched exactly.
    let missing = EventTypeRepo::find_by_abbr(&pool, "ws").await.unwrap();
    assert!(missing.is_none());
}
