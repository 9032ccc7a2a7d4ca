use serde::Deserialize;

/// Top-level configuration settings for the client.
///
/// Includes where the broker lives and how the client talks to it.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub client: ClientSettings,
}

/// Address of the broker the client connects to.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub host: String,
    pub port: u16,
}

/// Per-client parameters.
///
/// `read_buffer_size` bounds the largest frame a consumer can receive in a
/// single read.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientSettings {
    pub topic: String,
    pub read_buffer_size: usize,
    pub log_level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Missing values are filled from `Settings::default()`.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub client: Option<PartialClientSettings>,
}

#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize)]
pub struct PartialClientSettings {
    pub topic: Option<String>,
    pub read_buffer_size: Option<usize>,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            client: ClientSettings {
                topic: "default".to_string(),
                read_buffer_size: crate::consumer::DEFAULT_READ_BUFFER_SIZE,
                log_level: "info".to_string(),
            },
        }
    }
}

impl PartialSettings {
    /// Overlays whatever was provided on top of the defaults.
    pub fn merge_with_defaults(self) -> Settings {
        let default = Settings::default();
        let broker = self.broker;
        let client = self.client;

        Settings {
            broker: BrokerSettings {
                host: broker
                    .as_ref()
                    .and_then(|b| b.host.clone())
                    .unwrap_or(default.broker.host),
                port: broker
                    .as_ref()
                    .and_then(|b| b.port)
                    .unwrap_or(default.broker.port),
            },
            client: ClientSettings {
                topic: client
                    .as_ref()
                    .and_then(|c| c.topic.clone())
                    .unwrap_or(default.client.topic),
                read_buffer_size: client
                    .as_ref()
                    .and_then(|c| c.read_buffer_size)
                    .unwrap_or(default.client.read_buffer_size),
                log_level: client
                    .as_ref()
                    .and_then(|c| c.log_level.clone())
                    .unwrap_or(default.client.log_level),
            },
        }
    }
}
