use std::fs;
use std::io;
use std::path::Path;

use bevy::log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bundled default config, extracted next to the server on first run.
pub const DEFAULT_MESSAGES: &str = include_str!("../../assets/data/messages.config.ron");

/// Config format version written by this release. Files recorded with an
/// older format were written by pre-1.9 releases in the platform's
/// legacy encoding and get rewritten as UTF-8.
pub const FORMAT_VERSION: &str = "1.9";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("RON serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// On-disk shape of the messages config. Keys stay camelCase for
/// continuity with configs written by earlier releases.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagesFile {
    pub format: Option<String>,
    pub message_collected: Option<String>,
    pub message_disappear: Option<String>,
}

/// Copy the bundled default out if no config file exists yet.
pub fn ensure_default_file(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_MESSAGES)?;
    Ok(())
}

/// Read the config as UTF-8. Bytes that are not valid UTF-8 come from a
/// legacy-encoded file and are decoded lossily instead of failing.
pub fn read_config_text(path: &Path) -> Result<String, ConfigError> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!("{}: not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

pub fn parse_messages(text: &str) -> Result<MessagesFile, ConfigError> {
    Ok(ron::de::from_str(text)?)
}

/// Rewrite the file as UTF-8 in the current format, values preserved.
pub fn rewrite_current_format(path: &Path, file: &MessagesFile) -> Result<(), ConfigError> {
    let mut current = file.clone();
    current.format = Some(FORMAT_VERSION.to_string());
    let text = ron::ser::to_string_pretty(&current, ron::ser::PrettyConfig::default())?;
    fs::write(path, text)?;
    Ok(())
}
