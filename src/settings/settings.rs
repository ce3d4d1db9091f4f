use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub account: Account,
    pub auth: Auth,
    pub database: Database,
    pub http: Http,
    pub log: Log,
}

#[derive(Debug, Deserialize)]
pub struct Account {
    pub backend: String, // "fake" or "real"
}

#[derive(Debug, Deserialize)]
pub struct Auth {
    pub token_ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct Database {
    pub dsn: String,
}

#[derive(Debug, Deserialize)]
pub struct Http {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
