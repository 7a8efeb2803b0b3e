//! Tests for the in-memory product repository
//!
//! Covers the repository contract: round-trip equality, idempotent
//! delete, untouched collection on a missed update, and id monotonicity.

use stockroom_domain::{ProductDraft, ProductRepository};
use stockroom_infrastructure::InMemoryProductRepository;

fn draft(name: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: "Y".to_string(),
        price: 10.0,
        stock: 5,
        description: None,
        tag_keyword: None,
        discount: None,
        discount_category: None,
        views: None,
        revenue: None,
    }
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let repo = InMemoryProductRepository::new();

    let created = repo.create(draft("X")).await.unwrap();
    assert!(!created.id.is_empty());

    let fetched = repo.get(&created.id).await.unwrap().expect("just created");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn created_ids_are_distinct_and_monotonic() {
    let repo = InMemoryProductRepository::new();

    let a = repo.create(draft("a")).await.unwrap();
    let b = repo.create(draft("b")).await.unwrap();
    assert_eq!(a.id, "p1");
    assert_eq!(b.id, "p2");

    // Deleting does not free an id for reuse
    assert!(repo.delete(&b.id).await.unwrap());
    let c = repo.create(draft("c")).await.unwrap();
    assert_eq!(c.id, "p3");
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let repo = InMemoryProductRepository::new();
    repo.create(draft("first")).await.unwrap();
    repo.create(draft("second")).await.unwrap();
    repo.create(draft("third")).await.unwrap();

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let repo = InMemoryProductRepository::new();
    let created = repo.create(draft("X")).await.unwrap();
    assert_eq!(repo.list().await.unwrap().len(), 1);

    assert!(repo.delete(&created.id).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 0);
    assert!(repo.get(&created.id).await.unwrap().is_none());

    // Second delete reports nothing removed, length unchanged
    assert!(!repo.delete(&created.id).await.unwrap());
    assert_eq!(repo.list().await.unwrap().len(), 0);
}

#[tokio::test]
async fn update_replaces_the_whole_record() {
    let repo = InMemoryProductRepository::new();
    let mut created = repo.create(draft("X")).await.unwrap();

    created.name = "Renamed".to_string();
    created.price = 99.5;
    let updated = repo.update(created.clone()).await.unwrap().expect("exists");
    assert_eq!(updated, created);
    assert_eq!(repo.get(&created.id).await.unwrap().unwrap(), created);
}

#[tokio::test]
async fn update_of_missing_id_leaves_collection_unchanged() {
    let repo = InMemoryProductRepository::new();
    repo.create(draft("X")).await.unwrap();
    let before = repo.list().await.unwrap();

    let phantom = draft("ghost").with_id("p999");
    assert!(repo.update(phantom).await.unwrap().is_none());

    assert_eq!(repo.list().await.unwrap(), before);
}

#[tokio::test]
async fn seed_catalog_has_six_rows_and_continues_the_counter() {
    let repo = InMemoryProductRepository::with_seed_data();
    let products = repo.list().await.unwrap();
    assert_eq!(products.len(), 6);
    assert_eq!(products[0].id, "p1");
    assert_eq!(products[0].name, "Iphone 12 Pro");

    let created = repo.create(draft("new")).await.unwrap();
    assert_eq!(created.id, "p7");
}
