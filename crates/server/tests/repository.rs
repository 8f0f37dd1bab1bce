//! Repository tests against an in-memory store.
//!
//! Exercises the data-access contract directly, below the HTTP layer.

use annuaire_core::{CoiffeurRecord, CoiffeurUpdate};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use annuaire_server::db::coiffeurs::PAGE_SIZE;
use annuaire_server::db::{CoiffeurRepository, MIGRATOR};

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory store");
    MIGRATOR.run(&pool).await.expect("run migrations");
    pool
}

fn named(nom: &str) -> CoiffeurRecord {
    CoiffeurRecord {
        nom: Some(nom.to_owned()),
        ville: Some("Paris".to_owned()),
        ..CoiffeurRecord::default()
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);

    let first = repo.insert(&named("A")).await.expect("insert");
    let second = repo.insert(&named("B")).await.expect("insert");
    assert!(second.as_i64() > first.as_i64());
}

#[tokio::test]
async fn test_search_none_and_empty_term_are_equivalent() {
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);
    repo.insert(&named("A")).await.expect("insert");
    repo.insert(&named("B")).await.expect("insert");

    let all = repo.search(None).await.expect("search");
    let empty_term = repo.search(Some("")).await.expect("search");
    assert_eq!(all.len(), 2);
    assert_eq!(empty_term.len(), 2);
}

#[tokio::test]
async fn test_page_two_starts_at_the_eleventh_name() {
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);
    for i in (1..=12).rev() {
        repo.insert(&named(&format!("Salon {i:02}")))
            .await
            .expect("insert");
    }

    let page = repo.page(2).await.expect("page");
    let names: Vec<_> = page.iter().filter_map(|r| r.nom.as_deref()).collect();
    assert_eq!(names, ["Salon 11", "Salon 12"]);
}

#[tokio::test]
async fn test_page_size_constant_matches_query_limit() {
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);
    for i in 0..PAGE_SIZE + 1 {
        repo.insert(&named(&format!("Salon {i:02}")))
            .await
            .expect("insert");
    }

    let first = repo.page(1).await.expect("page");
    assert_eq!(i64::try_from(first.len()).expect("len"), PAGE_SIZE);
}

#[tokio::test]
async fn test_update_by_name_matching_nothing_is_ok() {
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);
    repo.insert(&named("A")).await.expect("insert");

    let update = CoiffeurUpdate {
        nom: Some("B".to_owned()),
        ..CoiffeurUpdate::default()
    };
    repo.update_by_name("Missing", &update)
        .await
        .expect("update reports success with zero matches");

    let all = repo.search(None).await.expect("search");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].nom.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_update_by_name_replaces_unset_fields_with_null() {
    // The update is a full replace of the five updatable columns, not a
    // merge: fields the caller leaves out become NULL.
    let pool = test_pool().await;
    let repo = CoiffeurRepository::new(&pool);
    repo.insert(&named("A")).await.expect("insert");

    let update = CoiffeurUpdate {
        nom: Some("A".to_owned()),
        numero: Some("7".to_owned()),
        ..CoiffeurUpdate::default()
    };
    repo.update_by_name("A", &update).await.expect("update");

    let all = repo.search(None).await.expect("search");
    assert_eq!(all[0].numero.as_deref(), Some("7"));
    assert_eq!(all[0].ville, None);
}
