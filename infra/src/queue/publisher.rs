//! RabbitMQ task event publisher.

use std::time::Duration;

use async_trait::async_trait;
use lapin::options::BasicPublishOptions;
use lapin::{BasicProperties, Channel, Connection};
use td_core::domain::value_objects::TaskEvent;
use td_core::errors::DomainError;
use td_core::services::task::EventPublisher;
use td_shared::config::QueueConfig;
use tracing::{debug, info};

use crate::InfrastructureError;

/// Publishes task events to the task queue via the default exchange.
///
/// The connection and channel are acquired once at startup and owned for
/// the life of the process; handlers publish through a shared reference.
pub struct RabbitMqPublisher {
    _connection: Connection,
    channel: Channel,
    queue_name: String,
    publish_timeout: Duration,
}

impl RabbitMqPublisher {
    /// Connect to the broker and declare the task queue
    pub async fn connect(config: &QueueConfig) -> Result<Self, InfrastructureError> {
        let (connection, channel) = super::open_channel(config).await?;

        info!(queue = %config.queue_name, "event publisher connected");
        Ok(Self {
            _connection: connection,
            channel,
            queue_name: config.queue_name.clone(),
            publish_timeout: Duration::from_secs(config.operation_timeout_secs),
        })
    }
}

#[async_trait]
impl EventPublisher for RabbitMqPublisher {
    async fn publish(&self, event: &TaskEvent) -> Result<(), DomainError> {
        let body = serde_json::to_vec(event).map_err(InfrastructureError::from)?;

        let publish = self.channel.basic_publish(
            "",
            &self.queue_name,
            BasicPublishOptions::default(),
            &body,
            BasicProperties::default(),
        );

        match tokio::time::timeout(self.publish_timeout, publish).await {
            Ok(result) => {
                let _confirm = result.map_err(InfrastructureError::from)?;
                debug!(event_type = ?event.event_type, "task event published");
                Ok(())
            }
            Err(_) => {
                Err(InfrastructureError::Timeout(self.publish_timeout.as_secs()).into())
            }
        }
    }
}
