//! TaskDeck notification service
//!
//! Consumes task events from the task queue and logs them. The receive
//! loop is event-driven and shuts down cleanly on ctrl-c; malformed
//! payloads are logged and skipped, never crash the consumer.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use td_core::domain::value_objects::{TaskEvent, TaskEventPayload, TaskEventType};
use td_infra::queue::RabbitMqConsumer;
use td_shared::config::QueueConfig;

const CONSUMER_TAG: &str = "taskdeck-notifier";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting TaskDeck notification service");

    let config = QueueConfig::from_env();
    let mut consumer = RabbitMqConsumer::connect(&config, CONSUMER_TAG).await?;
    info!(queue = %config.queue_name, "waiting for task events");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            event = consumer.next_event() => {
                match event {
                    Some(Ok(event)) => handle_event(event),
                    Some(Err(e)) => warn!(error = %e, "skipping undeliverable event"),
                    None => {
                        warn!("event stream closed by the broker");
                        break;
                    }
                }
            }
        }
    }

    info!("notification service stopped");
    Ok(())
}

fn handle_event(event: TaskEvent) {
    match (event.event_type, event.payload) {
        (TaskEventType::TaskCreated, TaskEventPayload::Task(task)) => {
            info!(id = task.id, title = %task.title, "new task created");
        }
        (TaskEventType::TaskUpdated, TaskEventPayload::Task(task)) => {
            info!(id = task.id, title = %task.title, completed = task.is_completed, "task updated");
        }
        (TaskEventType::TaskDeleted, TaskEventPayload::Deleted { id }) => {
            info!(id, "task deleted");
        }
        (event_type, _) => {
            warn!(?event_type, "event payload did not match its type");
        }
    }
}
