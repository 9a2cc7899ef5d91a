//! Server settings, read from an optional `settings` file (any format the
//! `config` crate understands) and `OPENSPLIT_*` environment variables.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub bind: String,
    pub port: u16,
    pub level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("bind", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("level", "info")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("OPENSPLIT"))
            .build()?;

        settings.try_deserialize()
    }
}
