//! Integration tests for metadata entry resolution.

use sqlx::PgPool;
use vidarc_db::repositories::MetadataEntryRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolve_creates_then_reuses(pool: PgPool) {
    let first = MetadataEntryRepo::resolve_or_create(&pool, "youtube:abc")
        .await
        .unwrap();
    assert!(first > 0);

    // Same identity key resolves to the same entry.
    let second = MetadataEntryRepo::resolve_or_create(&pool, "youtube:abc")
        .await
        .unwrap();
    assert_eq!(first, second);

    // A different key gets a fresh entry.
    let other = MetadataEntryRepo::resolve_or_create(&pool, "youtube:def")
        .await
        .unwrap();
    assert_ne!(first, other);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id(pool: PgPool) {
    let id = MetadataEntryRepo::resolve_or_create(&pool, "vimeo:42")
        .await
        .unwrap();

    let entry = MetadataEntryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(entry.id, id);
    assert_eq!(entry.identity_key, "vimeo:42");

    assert!(MetadataEntryRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}
