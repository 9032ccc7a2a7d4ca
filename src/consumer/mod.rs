//! The `consumer` module subscribes to a topic and streams messages.
//!
//! [`Consumer::consume`] writes one `CONSUME` envelope and hands the
//! connection to a background task. That task reads frames, skips one-byte
//! heartbeats, silently drops anything that does not decode, and forwards
//! the rest, in order, over a channel of capacity one. The next read only
//! starts once the caller has taken the previous message.

pub mod consumer;
mod listener;
pub mod stats;

pub use consumer::{Consumer, DEFAULT_READ_BUFFER_SIZE};
pub use stats::{ConsumerStats, StatsSnapshot};
