//! The `error` module defines the error types returned by `mq_client`.
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! match on a single [`Error`] enum and tell apart which stage failed:
//! address resolution, the TCP handshake, envelope encoding, inbound frame
//! decoding, or socket I/O.

use std::io;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `address:port` pair could not be resolved to a socket address.
    #[error("failed to resolve {addr}: {source}")]
    Resolution {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The TCP handshake with the broker failed.
    #[error("failed to connect to {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The request envelope could not be serialized.
    #[error("failed to encode request envelope: {0}")]
    Encoding(#[source] serde_json::Error),

    /// An inbound frame was not valid base64 or not valid JSON.
    #[error("failed to decode frame: {0}")]
    Decoding(#[from] DecodeError),

    #[error("failed to write to broker: {0}")]
    Write(#[source] io::Error),

    /// A read failed for a reason other than the peer closing the stream.
    #[error("failed to read from broker: {0}")]
    Read(#[source] io::Error),
}

/// The stage at which an inbound frame was rejected.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
