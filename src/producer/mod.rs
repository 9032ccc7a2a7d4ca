//! The `producer` module publishes messages to a single topic.
//!
//! Each call to [`Producer::produce`] opens its own connection, writes one
//! `PRODUCE` envelope and closes the connection again. The broker sends no
//! acknowledgement, so success means the frame reached the local socket,
//! not that the broker stored it.

pub mod producer;

pub use producer::Producer;
