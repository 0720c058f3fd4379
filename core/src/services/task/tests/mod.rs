//! Task service test suite

mod service_tests;

use std::sync::Arc;

use crate::repositories::MockTaskRepository;

use super::mock::{MockEventPublisher, MockTaskCache};
use super::TaskService;

pub(crate) struct TestHarness {
    pub service: TaskService<MockTaskRepository, MockTaskCache, MockEventPublisher>,
    pub repository: Arc<MockTaskRepository>,
    pub cache: Arc<MockTaskCache>,
    pub publisher: Arc<MockEventPublisher>,
}

pub(crate) fn harness() -> TestHarness {
    let repository = Arc::new(MockTaskRepository::new());
    let cache = Arc::new(MockTaskCache::new());
    let publisher = Arc::new(MockEventPublisher::new());

    TestHarness {
        service: TaskService::new(repository.clone(), cache.clone(), publisher.clone()),
        repository,
        cache,
        publisher,
    }
}
