//! Handles settings for the application.
//!
//! Values are layered: built-in defaults, then the optional
//! `config/settings.toml`, then the process environment (`BOT_TOKEN`,
//! `DATABASE_URL`, `PORT`, `BIND`, `LOG_LEVEL`).
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/settings";

const DEFAULT_PORT: u16 = 6788;
const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_DATABASE_URL: &str = "sqlite:./delta.db?mode=rwc";
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub bot_token: String,
    pub database_url: String,
    pub port: u16,
    pub bind: String,
    pub log_level: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_sources(
            File::with_name(DEFAULT_CONFIG_PATH).required(false),
            Environment::default().try_parsing(true),
        )
    }

    fn from_sources<F, E>(file: F, env: E) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("bind", DEFAULT_BIND)?
            .set_default("log_level", DEFAULT_LEVEL)?
            .add_source(file)
            .add_source(env)
            .build()?;

        let settings: Self = settings.try_deserialize()?;
        if settings.bot_token.trim().is_empty() {
            return Err(ConfigError::Message("BOT_TOKEN must not be empty".to_string()));
        }
        Ok(settings)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use config::FileFormat;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default()
            .try_parsing(true)
            .source(Some(source))
    }

    fn no_file() -> File<config::FileSourceString, FileFormat> {
        File::from_str("", FileFormat::Toml)
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let settings = Settings::from_sources(no_file(), env(&[("BOT_TOKEN", "123:abc")])).unwrap();
        assert_eq!(settings.bot_token, "123:abc");
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.listen_addr(), "0.0.0.0:6788");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn environment_overrides_file() {
        let file = File::from_str(
            "bot_token = \"from-file\"\nport = 8080\nlog_level = \"debug\"",
            FileFormat::Toml,
        );
        let settings = Settings::from_sources(
            file,
            env(&[("PORT", "9000"), ("DATABASE_URL", "sqlite::memory:")]),
        )
        .unwrap();
        assert_eq!(settings.bot_token, "from-file");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn missing_token_is_an_error() {
        assert!(Settings::from_sources(no_file(), env(&[])).is_err());
        assert!(Settings::from_sources(no_file(), env(&[("BOT_TOKEN", " ")])).is_err());
    }
}
