//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Path to the JSON snapshot with the listed records.
    pub snapshot_path: String,
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Reads `config/default.yaml`, the optional `config/{app_env}.yaml`
    /// profile and `APP_*` environment variables, later sources winning.
    pub fn load(app_env: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ServerConfig>()
    }
}
