use tracing::debug;

use crate::config::Settings;
use crate::connection::Connection;
use crate::protocol::{RequestType, encode};
use crate::utils::Result;

/// Sends messages to the broker at `address:port` on a fixed topic.
#[derive(Debug, Clone)]
pub struct Producer {
    address: String,
    port: u16,
    topic: String,
}

impl Producer {
    pub fn new(address: impl Into<String>, port: u16, topic: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port,
            topic: topic.into(),
        }
    }

    /// Builds a producer for the configured broker and topic.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.broker.host.clone(),
            settings.broker.port,
            settings.client.topic.clone(),
        )
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Publishes `message` to this producer's topic.
    ///
    /// Errors are returned as they happen and nothing is retried.
    pub async fn produce(&self, message: &str) -> Result<()> {
        let mut conn = Connection::open(&self.address, self.port).await?;

        let frame = encode(RequestType::Produce, &self.topic, message)?;
        conn.write(frame.as_bytes()).await?;

        debug!(
            "produced {} bytes to topic '{}' via {}",
            frame.len(),
            self.topic,
            conn.peer_addr()
        );

        Ok(())
    }
}
