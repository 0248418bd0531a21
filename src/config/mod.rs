pub mod file;

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use crate::chat::translate_color_codes;
use crate::compat::is_upper_version;

pub use file::ConfigError;
use file::{FORMAT_VERSION, MessagesFile};

/// Default location of the messages config, relative to the server's
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/messages.ron";

/// Message templates, color-normalized at load time. `None` disables the
/// corresponding message. Never mutated after startup.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MessageTemplates {
    pub collected: Option<String>,
    pub disappear: Option<String>,
}

pub struct ConfigPlugin {
    pub path: PathBuf,
}

impl Default for ConfigPlugin {
    fn default() -> Self {
        Self {
            path: DEFAULT_CONFIG_PATH.into(),
        }
    }
}

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        let templates = match load_templates(&self.path) {
            Ok(templates) => {
                info!("message config loaded from {}", self.path.display());
                templates
            }
            Err(err) => {
                warn!("message config unavailable ({err}), messages disabled");
                MessageTemplates::default()
            }
        };
        app.insert_resource(templates);
    }
}

/// Full load pipeline: extract the bundled default on first run, read
/// with the legacy-encoding fallback, parse, migrate pre-1.9 files to
/// UTF-8 in place, and normalize color codes.
pub fn load_templates(path: &Path) -> Result<MessageTemplates, ConfigError> {
    file::ensure_default_file(path)?;
    let text = file::read_config_text(path)?;
    let parsed: MessagesFile = file::parse_messages(&text)?;

    let format = parsed.format.as_deref().unwrap_or("0");
    if !is_upper_version(format, FORMAT_VERSION)
        && let Err(err) = file::rewrite_current_format(path, &parsed)
    {
        warn!("could not migrate {}: {err}", path.display());
    }

    Ok(MessageTemplates {
        collected: parsed
            .message_collected
            .as_deref()
            .map(translate_color_codes),
        disappear: parsed
            .message_disappear
            .as_deref()
            .map(translate_color_codes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("cartkeeper-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn first_run_extracts_default_and_translates_colors() {
        let path = temp_path("first-run.ron");
        let _ = fs::remove_file(&path);

        let templates = load_templates(&path).unwrap();

        assert!(path.exists());
        assert_eq!(templates.collected.as_deref(), Some("§aMinecart collected."));
        assert!(templates.disappear.as_deref().unwrap().starts_with("§c"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn absent_values_stay_none() {
        let path = temp_path("partial.ron");
        fs::write(&path, "(format: Some(\"1.9\"), messageCollected: Some(\"&aGot it\"))").unwrap();

        let templates = load_templates(&path).unwrap();

        assert_eq!(templates.collected.as_deref(), Some("§aGot it"));
        assert!(templates.disappear.is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn legacy_format_is_rewritten_in_place() {
        let path = temp_path("legacy-format.ron");
        fs::write(&path, "(format: Some(\"1.0\"), messageDisappear: Some(\"gone\"))").unwrap();

        let templates = load_templates(&path).unwrap();

        assert_eq!(templates.disappear.as_deref(), Some("gone"));
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("1.9"));
        assert!(on_disk.contains("gone"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unversioned_file_counts_as_legacy() {
        let path = temp_path("unversioned.ron");
        fs::write(&path, "(messageCollected: Some(\"old\"))").unwrap();

        load_templates(&path).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("1.9"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_path("malformed.ron");
        fs::write(&path, "not ron at all {{{").unwrap();

        assert!(load_templates(&path).is_err());

        let _ = fs::remove_file(&path);
    }
}
