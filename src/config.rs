use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// HTTP port to listen on (bound on 127.0.0.1).
    pub port: u16,

    /// Log level for tracing (e.g. "info", "debug").
    pub log_level: String,

    /// Version string reported by /system/version.
    pub server_version: String,
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Self {
        let file = fs::read_to_string(Path::new(path))
            .expect("Failed to read config.json");

        serde_json::from_str::<AppConfig>(&file)
            .expect("Invalid config.json")
    }
}
