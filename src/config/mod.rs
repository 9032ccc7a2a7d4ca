mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::{
    BrokerSettings, ClientSettings, PartialBrokerSettings, PartialClientSettings, PartialSettings,
    Settings,
};

/// Loads the configuration from the default file and environment variables.
///
/// Sources, later ones winning:
/// - `config/default.{toml,json,yaml,...}` in the working directory (optional)
/// - `MQ_`-prefixed environment variables, `__` between sections and keys,
///   e.g. `MQ_BROKER__PORT=9000` or `MQ_CLIENT__READ_BUFFER_SIZE=4096`
///
/// Anything left unspecified takes its value from `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            Environment::with_prefix("MQ")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(partial.merge_with_defaults())
}
