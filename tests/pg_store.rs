mod common;

use review_service::db::ReviewStore;
use review_service::models::{Review, ReviewEntry};

fn review_for(product_id: i32, text: &str) -> Review {
    let mut review = Review::new(product_id);
    review.version = 1;
    review
        .entries
        .push(ReviewEntry::received("pg-user".to_string(), text.to_string()));
    review
}

#[tokio::test]
async fn postgres_store_round_trips_documents() {
    let Some(store) = common::postgres_store().await else {
        return;
    };

    let saved = store.put(review_for(1, "first")).await.unwrap();
    let id = saved.persisted_id().expect("id assigned").to_string();

    let fetched = store.get(&id).await.unwrap().expect("stored");
    assert_eq!(fetched, saved);
    assert!(store.get("doesnotexist").await.unwrap().is_none());
}

#[tokio::test]
async fn postgres_store_overwrites_and_keeps_insertion_order() {
    let Some(store) = common::postgres_store().await else {
        return;
    };

    let mut first = store.put(review_for(5, "a")).await.unwrap();
    let second = store.put(review_for(5, "b")).await.unwrap();
    store.put(review_for(6, "c")).await.unwrap();

    first
        .entries
        .push(ReviewEntry::received("pg-user".to_string(), "a2".to_string()));
    store.put(first.clone()).await.unwrap();

    let by_product = store.get_by_product_id(5).await.unwrap().unwrap();
    assert_eq!(by_product.id, first.id);
    assert_eq!(by_product.entries.len(), 2);

    let all = store.get_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids[0], first.id);
    assert_eq!(ids[1], second.id);
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn postgres_store_delete_is_idempotent() {
    let Some(store) = common::postgres_store().await else {
        return;
    };

    let saved = store.put(review_for(2, "gone soon")).await.unwrap();
    let id = saved.persisted_id().unwrap().to_string();

    store.delete_by_id(&id).await.unwrap();
    store.delete_by_id(&id).await.unwrap();

    assert!(store.get(&id).await.unwrap().is_none());
}
