use std::{fs, io, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::roster::IdAssignment;

pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_SETTINGS_FILE: &str = "roster.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid directory url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("directory url '{0}' must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory_url: String,
    pub request_timeout_seconds: u64,
    pub id_assignment: IdAssignment,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            directory_url: DEFAULT_DIRECTORY_URL.into(),
            request_timeout_seconds: 30,
            id_assignment: IdAssignment::default(),
        }
    }
}

impl Settings {
    pub fn directory_endpoint(&self) -> Result<Url, SettingsError> {
        let url = Url::parse(self.directory_url.trim()).map_err(|source| {
            SettingsError::InvalidUrl {
                url: self.directory_url.clone(),
                source,
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SettingsError::UnsupportedScheme(self.directory_url.clone()));
        }
        Ok(url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    directory_url: Option<String>,
    request_timeout_seconds: Option<u64>,
    id_assignment: Option<IdAssignment>,
}

/// Where the settings file came from. A missing file is only worth a warning
/// when the user named it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFile<'a> {
    Default(&'a Path),
    Explicit(&'a Path),
}

impl<'a> SettingsFile<'a> {
    fn path(self) -> &'a Path {
        match self {
            SettingsFile::Default(path) | SettingsFile::Explicit(path) => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileOutcome {
    Applied,
    Missing,
    Unreadable,
    Unparsable,
}

/// Defaults, then `roster.toml` in the working directory (or `config_path`),
/// then environment overrides.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let file = match config_path {
        Some(path) => SettingsFile::Explicit(path),
        None => SettingsFile::Default(Path::new(DEFAULT_SETTINGS_FILE)),
    };
    load_settings_with(file, |name| std::env::var(name).ok())
}

pub fn load_settings_with<F>(file: SettingsFile<'_>, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();
    apply_file(&mut settings, file);
    apply_env(&mut settings, env);
    settings
}

fn apply_file(settings: &mut Settings, file: SettingsFile<'_>) -> FileOutcome {
    let path = file.path();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if let SettingsFile::Explicit(_) = file {
                warn!("settings file '{}' not found, using defaults", path.display());
            }
            return FileOutcome::Missing;
        }
        Err(err) => {
            warn!("ignoring unreadable settings file '{}': {err}", path.display());
            return FileOutcome::Unreadable;
        }
    };
    let file_cfg = match toml::from_str::<FileSettings>(&raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!("ignoring unparsable settings file '{}': {err}", path.display());
            return FileOutcome::Unparsable;
        }
    };

    if let Some(v) = file_cfg.directory_url {
        settings.directory_url = v;
    }
    if let Some(v) = file_cfg.request_timeout_seconds {
        settings.request_timeout_seconds = v;
    }
    if let Some(v) = file_cfg.id_assignment {
        settings.id_assignment = v;
    }
    FileOutcome::Applied
}

fn apply_env<F>(settings: &mut Settings, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = env("DIRECTORY_URL") {
        settings.directory_url = v;
    }
    if let Some(v) = env("APP__DIRECTORY_URL") {
        settings.directory_url = v;
    }

    if let Some(v) = env("APP__REQUEST_TIMEOUT_SECONDS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_seconds = parsed,
            Err(err) => warn!("ignoring APP__REQUEST_TIMEOUT_SECONDS={v:?}: {err}"),
        }
    }

    if let Some(v) = env("APP__ID_ASSIGNMENT") {
        match IdAssignment::parse(&v) {
            Some(parsed) => settings.id_assignment = parsed,
            None => warn!("ignoring unknown APP__ID_ASSIGNMENT={v:?}"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
