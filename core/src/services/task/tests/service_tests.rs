//! Read-through cache and best-effort hook tests

use uuid::Uuid;

use crate::domain::entities::task::{NewTask, TaskChanges};
use crate::domain::value_objects::TaskEventType;
use crate::errors::DomainError;
use crate::services::task::TaskCache;

use super::harness;

fn new_task(user_id: Uuid, title: &str) -> NewTask {
    NewTask::new(user_id, title, "description", false)
}

#[tokio::test]
async fn list_populates_cache_and_second_read_skips_the_store() {
    let h = harness();
    let user = Uuid::new_v4();

    h.service.create(new_task(user, "one")).await.unwrap();
    h.service.create(new_task(user, "two")).await.unwrap();

    let first = h.service.list().await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(h.repository.list_call_count(), 1);
    assert!(h.cache.entry().await.is_some());

    let second = h.service.list().await.unwrap();
    assert_eq!(second, first);
    // Served from cache: the store was not touched again
    assert_eq!(h.repository.list_call_count(), 1);
}

#[tokio::test]
async fn create_invalidates_the_cached_list() {
    let h = harness();
    let user = Uuid::new_v4();

    h.service.create(new_task(user, "one")).await.unwrap();
    h.service.list().await.unwrap();
    assert!(h.cache.entry().await.is_some());

    h.service.create(new_task(user, "two")).await.unwrap();
    assert!(h.cache.entry().await.is_none());

    // The next read repopulates from the store
    let tasks = h.service.list().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(h.repository.list_call_count(), 2);
}

#[tokio::test]
async fn every_mutation_publishes_an_event() {
    let h = harness();
    let user = Uuid::new_v4();

    let task = h.service.create(new_task(user, "one")).await.unwrap();
    h.service
        .update(
            user,
            task.id,
            TaskChanges {
                title: "one!".into(),
                description: "description".into(),
                is_completed: true,
            },
        )
        .await
        .unwrap();
    h.service.delete(user, task.id).await.unwrap();

    let events = h.publisher.published().await;
    let kinds: Vec<_> = events.iter().map(|e| e.event_type).collect();
    assert_eq!(
        kinds,
        vec![
            TaskEventType::TaskCreated,
            TaskEventType::TaskUpdated,
            TaskEventType::TaskDeleted,
        ]
    );
}

#[tokio::test]
async fn cache_and_queue_failures_do_not_fail_the_write() {
    let h = harness();
    let user = Uuid::new_v4();

    h.cache.set_unavailable(true);
    h.publisher.set_unavailable(true);

    let task = h.service.create(new_task(user, "resilient")).await.unwrap();
    assert!(task.id > 0);

    // The mutation is durable even though both hooks failed
    h.cache.set_unavailable(false);
    h.publisher.set_unavailable(false);
    assert_eq!(h.service.list().await.unwrap().len(), 1);
    assert!(h.publisher.published().await.is_empty());
}

#[tokio::test]
async fn unavailable_cache_degrades_reads_to_the_store() {
    let h = harness();
    let user = Uuid::new_v4();

    h.service.create(new_task(user, "one")).await.unwrap();
    h.cache.set_unavailable(true);

    assert_eq!(h.service.list().await.unwrap().len(), 1);
    assert_eq!(h.service.list().await.unwrap().len(), 1);
    // Every read hit the store while the cache was down
    assert_eq!(h.repository.list_call_count(), 2);
}

#[tokio::test]
async fn corrupt_cache_entry_falls_back_to_the_store() {
    let h = harness();
    let user = Uuid::new_v4();

    h.service.create(new_task(user, "one")).await.unwrap();
    h.cache.store_task_list("not json").await.unwrap();

    let tasks = h.service.list().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(h.repository.list_call_count(), 1);
    // The bad entry was replaced with the fresh serialization
    let entry = h.cache.entry().await.unwrap();
    assert!(entry.starts_with('['));
}

#[tokio::test]
async fn update_enforces_ownership() {
    let h = harness();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let task = h.service.create(new_task(owner, "mine")).await.unwrap();

    let result = h
        .service
        .update(
            intruder,
            task.id,
            TaskChanges {
                title: "stolen".into(),
                description: "".into(),
                is_completed: false,
            },
        )
        .await;

    match result {
        Err(DomainError::NotFound { .. }) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn delete_enforces_ownership_and_missing_task_is_not_found() {
    let h = harness();
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let task = h.service.create(new_task(owner, "mine")).await.unwrap();

    assert!(matches!(
        h.service.delete(intruder, task.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        h.service.delete(owner, 9999).await,
        Err(DomainError::NotFound { .. })
    ));

    h.service.delete(owner, task.id).await.unwrap();
    assert_eq!(h.service.list().await.unwrap().len(), 0);
}
