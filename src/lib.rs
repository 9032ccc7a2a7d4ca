//! # mq-client
//!
//! `mq_client` is a small async client for a TCP message-queue broker. It
//! provides a [`Producer`] that sends one message per call and a
//! [`Consumer`] that subscribes to a topic and streams decoded messages
//! over a channel until it is cancelled.
//!
//! Every request is a single `base64(json)` envelope,
//! `{"type": "PRODUCE" | "CONSUME", "body": ..., "topic": ...}`, written once
//! at the start of a connection.
//!
//! ## Core Modules
//!
//! - `protocol`: request envelope, inbound message type and the wire codec.
//! - `connection`: opening the TCP stream and reading/writing frames.
//! - `producer`: one-shot publishing to a topic.
//! - `consumer`: subscribing and the background read loop.
//! - `config`: optional file/environment configuration.
//! - `utils`: error types and logging setup.
//!
//! ## Limitations
//!
//! The protocol has no framing. Each read is decoded as one frame, so a
//! message split across reads (or larger than the consumer's read buffer) is
//! dropped. There is no acknowledgement, retry or reconnection.
//!
//! ## Example
//!
//! ```no_run
//! use mq_client::{Consumer, Producer};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> mq_client::Result<()> {
//! let cancel = CancellationToken::new();
//! let consumer = Consumer::new("127.0.0.1", 8080, "orders", cancel.clone());
//! let mut messages = consumer.consume().await?;
//!
//! Producer::new("127.0.0.1", 8080, "orders").produce("hello").await?;
//!
//! if let Some(msg) = messages.recv().await {
//!     println!("{}: {}", msg.topic, msg.body);
//! }
//! cancel.cancel();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod consumer;
pub mod producer;
pub mod protocol;
pub mod utils;

pub use consumer::{Consumer, ConsumerStats, StatsSnapshot};
pub use producer::Producer;
pub use protocol::{Envelope, Message, RequestType};
pub use utils::{DecodeError, Error, Result};
