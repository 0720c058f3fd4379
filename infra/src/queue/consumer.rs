//! RabbitMQ task event consumer.

use futures_util::StreamExt;
use lapin::options::BasicConsumeOptions;
use lapin::types::FieldTable;
use lapin::{Channel, Connection, Consumer};
use td_core::domain::value_objects::TaskEvent;
use td_shared::config::QueueConfig;
use tracing::info;

use crate::InfrastructureError;

/// Consumes task events from the task queue with auto-ack.
///
/// Delivery is fire-and-forget on the producer side, so there is nothing to
/// nack: a payload that fails to parse is reported to the caller and the
/// stream moves on.
pub struct RabbitMqConsumer {
    _connection: Connection,
    _channel: Channel,
    consumer: Consumer,
}

impl RabbitMqConsumer {
    /// Connect to the broker and start consuming the task queue
    pub async fn connect(
        config: &QueueConfig,
        consumer_tag: &str,
    ) -> Result<Self, InfrastructureError> {
        let (connection, channel) = super::open_channel(config).await?;

        let consumer = channel
            .basic_consume(
                &config.queue_name,
                consumer_tag,
                BasicConsumeOptions {
                    no_ack: true,
                    ..Default::default()
                },
                FieldTable::default(),
            )
            .await?;

        info!(queue = %config.queue_name, tag = consumer_tag, "event consumer ready");
        Ok(Self {
            _connection: connection,
            _channel: channel,
            consumer,
        })
    }

    /// Receive the next event.
    ///
    /// Blocks until a delivery arrives; returns `None` once the broker
    /// closes the stream.
    pub async fn next_event(&mut self) -> Option<Result<TaskEvent, InfrastructureError>> {
        let delivery = self.consumer.next().await?;

        Some(delivery.map_err(InfrastructureError::from).and_then(|d| {
            serde_json::from_slice::<TaskEvent>(&d.data).map_err(InfrastructureError::from)
        }))
    }
}
