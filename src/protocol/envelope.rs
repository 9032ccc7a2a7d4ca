use serde::{Deserialize, Serialize};

/// The kind of request a client makes to the broker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestType {
    Produce,
    Consume,
}

/// The request written to the broker, once, at the start of a connection.
///
/// On the wire this is `base64(json)` of the three fields below:
///
/// ```json
/// {"type":"PRODUCE","body":"hello","topic":"orders"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: RequestType,
    pub body: String,
    pub topic: String,
}

impl Envelope {
    pub fn new(kind: RequestType, topic: &str, body: &str) -> Self {
        Self {
            kind,
            body: body.to_string(),
            topic: topic.to_string(),
        }
    }

    /// A publish request carrying `body` to `topic`.
    pub fn produce(topic: &str, body: &str) -> Self {
        Self::new(RequestType::Produce, topic, body)
    }

    /// A subscribe request. The body is always empty.
    pub fn consume(topic: &str) -> Self {
        Self::new(RequestType::Consume, topic, "")
    }
}
