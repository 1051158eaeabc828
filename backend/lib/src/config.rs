use std::io::IsTerminal;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::counter::DEFAULT_COOLDOWN_SECS;
use crate::constants::paths::{DEFAULT_DATA_DIR, DEFAULT_STATIC_DIR, DEFAULT_TEMPLATES_DIR};
use crate::constants::server::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::Error;
use crate::models::CounterKind;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Text on a terminal, JSON otherwise
    #[default]
    Auto,
    Json,
    Text,
}

impl LogFormat {
    /// Turn `Auto` into a concrete format by looking at stdout
    pub fn resolve(self) -> Self {
        match self {
            LogFormat::Auto if std::io::stdout().is_terminal() => LogFormat::Text,
            LogFormat::Auto => LogFormat::Json,
            other => other,
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(LogFormat::Auto),
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(Error::Config(format!("Unknown log format: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding one JSON file per counter
    pub data_dir: PathBuf,
    /// Directory served under `/sounds` and `/static`
    pub static_dir: PathBuf,
    /// Legacy location of the sound files, emptied into `static_dir` on startup
    pub templates_dir: PathBuf,
    pub cooldown_secs: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            cooldown_secs: DEFAULT_COOLDOWN_SECS,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    /// File backing the counter of the given kind
    pub fn counter_path(&self, kind: CounterKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.cooldown(), Duration::from_secs(3));
        assert_eq!(
            config.counter_path(CounterKind::Stoehn),
            PathBuf::from("data").join("stoehn.json")
        );
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            port = 8080
            data_dir = "/var/lib/seufz"
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/seufz"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cooldown_secs, 3);
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::Text.resolve(), LogFormat::Text);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
