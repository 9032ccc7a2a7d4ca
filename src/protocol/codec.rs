//! Wire encoding for envelopes: `base64(json)`, standard alphabet, padded.
//!
//! There is no length prefix or delimiter. Whatever one read returns is
//! treated as one frame, so a frame split or merged by TCP will fail to
//! decode.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::de::DeserializeOwned;

use crate::protocol::envelope::{Envelope, RequestType};
use crate::utils::{DecodeError, Error, Result};

/// Inbound reads of exactly this many bytes are broker liveness probes.
pub const HEARTBEAT_LEN: usize = 1;

/// Returns true when a read of `n` bytes is a heartbeat rather than a frame.
pub fn is_heartbeat(n: usize) -> bool {
    n == HEARTBEAT_LEN
}

/// Builds an envelope and encodes it as a text frame.
pub fn encode(kind: RequestType, topic: &str, body: &str) -> Result<String> {
    encode_envelope(&Envelope::new(kind, topic, body))
}

pub fn encode_envelope(envelope: &Envelope) -> Result<String> {
    let json = serde_json::to_vec(envelope).map_err(Error::Encoding)?;
    Ok(BASE64_STANDARD.encode(json))
}

/// Decodes one frame: base64 first, then JSON into `T`.
pub fn decode<T: DeserializeOwned>(frame: &[u8]) -> Result<T> {
    let json = BASE64_STANDARD
        .decode(frame)
        .map_err(DecodeError::from)?;
    let value = serde_json::from_slice(&json).map_err(DecodeError::from)?;
    Ok(value)
}
