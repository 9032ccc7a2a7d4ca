//! The `protocol` module defines what travels over the socket: the request
//! [`Envelope`] a client sends, the [`Message`] a consumer receives, and the
//! `base64(json)` codec between them. Nothing in here does I/O.

pub mod codec;
pub mod envelope;
pub mod message;

pub use codec::{HEARTBEAT_LEN, decode, encode, encode_envelope, is_heartbeat};
pub use envelope::{Envelope, RequestType};
pub use message::Message;

#[cfg(test)]
mod tests;
