mod common;

use futures_util::TryStreamExt;
use golink::domain::entities::LinkRecord;
use golink::domain::repositories::LinkRepository;
use golink::error::LinkError;
use golink::infrastructure::persistence::SqliteLinkRepository;

#[tokio::test]
async fn test_insert_and_find() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    repo.insert(&LinkRecord::new("g", "https://google.com"))
        .await
        .unwrap();

    let found = repo.find_by_name("g").await.unwrap();
    assert_eq!(found, Some(LinkRecord::new("g", "https://google.com")));
    assert_eq!(common::count_links(&pool).await, 1);
}

#[tokio::test]
async fn test_find_not_found() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let found = repo.find_by_name("missing").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_find_is_exact_match() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "Docs", "https://docs.example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    assert!(repo.find_by_name("docs").await.unwrap().is_none());
    assert!(repo.find_by_name("Docs").await.unwrap().is_some());
}

#[tokio::test]
async fn test_insert_duplicate_is_already_exists() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "foo", "https://a.example.com").await;
    let repo = SqliteLinkRepository::new(pool.clone());

    let err = repo
        .insert(&LinkRecord::new("foo", "https://b.example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, LinkError::AlreadyExists(ref name) if name == "foo"));
    let kept = repo.find_by_name("foo").await.unwrap().unwrap();
    assert_eq!(kept.address, "https://a.example.com");
}

#[tokio::test]
async fn test_update_renames_and_retargets() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "foo", "https://a.example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    let affected = repo
        .update("foo", &LinkRecord::new("bar", "https://b.example.com"))
        .await
        .unwrap();

    assert_eq!(affected, 1);
    assert!(repo.find_by_name("foo").await.unwrap().is_none());
    assert_eq!(
        repo.find_by_name("bar").await.unwrap(),
        Some(LinkRecord::new("bar", "https://b.example.com"))
    );
}

#[tokio::test]
async fn test_update_missing_affects_nothing() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool.clone());

    let affected = repo
        .update("foo", &LinkRecord::new("bar", "https://b.example.com"))
        .await
        .unwrap();

    assert_eq!(affected, 0);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_update_onto_taken_name_is_already_exists() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "foo", "https://a.example.com").await;
    common::create_test_link(&pool, "bar", "https://b.example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    let err = repo
        .update("foo", &LinkRecord::new("bar", "https://c.example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, LinkError::AlreadyExists(ref name) if name == "bar"));
    assert_eq!(
        repo.find_by_name("foo").await.unwrap().unwrap().address,
        "https://a.example.com"
    );
}

#[tokio::test]
async fn test_delete() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "foo", "https://a.example.com").await;
    let repo = SqliteLinkRepository::new(pool.clone());

    assert_eq!(repo.delete("foo").await.unwrap(), 1);
    assert_eq!(repo.delete("foo").await.unwrap(), 0);
    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_list_and_count() {
    let pool = common::test_pool().await;
    common::create_test_link(&pool, "zeta", "https://z.example.com").await;
    common::create_test_link(&pool, "alpha", "https://a.example.com").await;
    common::create_test_link(&pool, "mid", "https://m.example.com").await;
    let repo = SqliteLinkRepository::new(pool);

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();

    assert_eq!(names, ["alpha", "mid", "zeta"]);
    assert_eq!(repo.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_stream_yields_every_record_once() {
    let pool = common::test_pool().await;
    for i in 0..25 {
        common::create_test_link(&pool, &format!("link{i:02}"), "https://example.com").await;
    }
    let repo = SqliteLinkRepository::new(pool);

    let records: Vec<LinkRecord> = repo.stream().try_collect().await.unwrap();

    assert_eq!(records.len(), 25);
    assert_eq!(records.first().unwrap().name, "link00");
    assert_eq!(records.last().unwrap().name, "link24");

    // A second pass starts over.
    let again: Vec<LinkRecord> = repo.stream().try_collect().await.unwrap();
    assert_eq!(again, records);
}

#[tokio::test]
async fn test_stream_empty() {
    let pool = common::test_pool().await;
    let repo = SqliteLinkRepository::new(pool);

    let records: Vec<LinkRecord> = repo.stream().try_collect().await.unwrap();

    assert!(records.is_empty());
}
