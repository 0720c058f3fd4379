//! Queue module - RabbitMQ publisher and consumer for task events
//!
//! Both sides declare the same named, non-durable queue so either may start
//! first. Delivery is fire-and-forget: publishing is best-effort and the
//! consumer auto-acks.

pub mod consumer;
pub mod publisher;

pub use consumer::RabbitMqConsumer;
pub use publisher::RabbitMqPublisher;

use lapin::options::QueueDeclareOptions;
use lapin::types::FieldTable;
use lapin::{Channel, Connection, ConnectionProperties};
use td_shared::config::QueueConfig;

use crate::InfrastructureError;

/// Open a connection and channel, declaring the task queue on the way
pub(crate) async fn open_channel(
    config: &QueueConfig,
) -> Result<(Connection, Channel), InfrastructureError> {
    let connection = Connection::connect(&config.url, ConnectionProperties::default()).await?;
    let channel = connection.create_channel().await?;

    channel
        .queue_declare(
            &config.queue_name,
            QueueDeclareOptions {
                durable: false,
                exclusive: false,
                auto_delete: false,
                ..Default::default()
            },
            FieldTable::default(),
        )
        .await?;

    Ok((connection, channel))
}
