use std::{collections::HashMap, time::Duration};

use anyhow::Context;
use config::{Config, Environment, File, Source};
use serde::Deserialize;
use shared::domain::normalized_name;

pub const SETTINGS_FILE: &str = "directory.toml";
const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server_bind: String,
    pub locations: Vec<String>,
    pub taken_names: Vec<String>,
    pub response_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8450".into(),
            locations: vec![
                "Canada".into(),
                "China".into(),
                "USA".into(),
                "Brazil".into(),
            ],
            taken_names: vec!["invalid name".into()],
            response_delay_ms: 0,
        }
    }
}

impl Settings {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    fn normalize(mut self) -> Self {
        self.server_bind = self.server_bind.trim().to_string();
        if self.server_bind.is_empty() {
            self.server_bind = Settings::default().server_bind;
        }
        self.locations = self
            .locations
            .into_iter()
            .map(|location| location.trim().to_string())
            .filter(|location| !location.is_empty())
            .collect();
        self.taken_names = self
            .taken_names
            .iter()
            .map(|name| normalized_name(name))
            .filter(|name| !name.is_empty())
            .collect();
        self
    }
}

/// Defaults, then `directory.toml` in the working directory (optional), then `APP__*` env vars.
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(
        File::with_name(SETTINGS_FILE).required(false),
        environment(None),
    )
}

fn environment(source: Option<HashMap<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("locations")
        .with_list_parse_key("taken_names")
        .source(source)
}

fn build_settings<S>(file: S, env: Environment) -> anyhow::Result<Settings>
where
    S: Source + Send + Sync + 'static,
{
    let settings: Settings = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("failed to assemble directory settings")?
        .try_deserialize()
        .context("invalid directory settings")?;
    Ok(settings.normalize())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
