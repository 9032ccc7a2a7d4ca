use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A message delivered by the broker to a consumer.
///
/// The broker decides the exact shape. `topic` and `body` are picked out
/// because they are what a producer sends; any other key is kept in `extra`
/// untouched. Missing `topic`/`body` decode as empty strings, but the frame
/// must still be a JSON object.
///
/// # Example
///
/// ```rust
/// use mq_client::Message;
///
/// let msg: Message = serde_json::from_str(r#"{"topic":"orders","body":"hello","id":7}"#).unwrap();
/// assert_eq!(msg.topic, "orders");
/// assert_eq!(msg.body, "hello");
/// assert_eq!(msg.get("id"), Some(&serde_json::json!(7)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub body: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    /// Looks up a broker-defined field that is not `topic` or `body`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
