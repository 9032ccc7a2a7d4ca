use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::Settings;
use crate::connection::Connection;
use crate::consumer::listener::Listener;
use crate::consumer::stats::ConsumerStats;
use crate::protocol::{HEARTBEAT_LEN, Message, RequestType, encode};
use crate::utils::Result;

/// Size of the receive buffer when none is configured. A frame larger than
/// this arrives over several reads and is dropped.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 1000;

/// Subscribes to one topic and streams the broker's messages to a channel.
///
/// The token passed at construction is the only way to stop a session:
/// cancel it and the channel returned by [`Consumer::consume`] closes after
/// the worker's current read returns.
#[derive(Debug, Clone)]
pub struct Consumer {
    address: String,
    port: u16,
    topic: String,
    cancel: CancellationToken,
    read_buffer_size: usize,
    stats: Arc<ConsumerStats>,
}

impl Consumer {
    pub fn new(
        address: impl Into<String>,
        port: u16,
        topic: impl Into<String>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            address: address.into(),
            port,
            topic: topic.into(),
            cancel,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            stats: Arc::new(ConsumerStats::default()),
        }
    }

    pub fn from_settings(settings: &Settings, cancel: CancellationToken) -> Self {
        Self::new(
            settings.broker.host.clone(),
            settings.broker.port,
            settings.client.topic.clone(),
            cancel,
        )
        .with_read_buffer_size(settings.client.read_buffer_size)
    }

    /// Sets the receive buffer size. Anything that could not hold more than
    /// a heartbeat is raised to the smallest useful size.
    pub fn with_read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size.max(HEARTBEAT_LEN + 1);
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn read_buffer_size(&self) -> usize {
        self.read_buffer_size
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Counters shared with every session this consumer starts.
    pub fn stats(&self) -> Arc<ConsumerStats> {
        Arc::clone(&self.stats)
    }

    /// Connects, subscribes to the topic and returns the message channel.
    ///
    /// Returns as soon as the subscribe request is written; a background
    /// task then owns the connection. Setup errors are returned here and no
    /// task is started. Once running, corrupt frames and read errors never
    /// end the session, only cancellation does. The task does not read the
    /// next frame until the caller has received the previous message.
    pub async fn consume(&self) -> Result<mpsc::Receiver<Message>> {
        let mut conn = Connection::open(&self.address, self.port).await?;

        let frame = encode(RequestType::Consume, &self.topic, "")?;
        conn.write(frame.as_bytes()).await?;

        debug!(
            "subscribed to topic '{}' at {}",
            self.topic,
            conn.peer_addr()
        );

        // one slot, and the listener reserves it before every read
        let (sender, receiver) = mpsc::channel(1);

        let listener = Listener {
            conn,
            sender,
            cancel: self.cancel.clone(),
            buffer_size: self.read_buffer_size,
            stats: self.stats(),
        };
        tokio::spawn(listener.run());

        Ok(receiver)
    }
}
