use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::save::save_to_path;
use super::types::AppSettings;
use super::{API_URL_ENV, CONFIG_FILE_NAME, ConfigError, map_app_dir_error};

/// Resolve the settings file path, ensuring the app directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::AppDir::Root.ensure().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the app directory, writing defaults on first launch.
///
/// `PCREC_API_URL` takes precedence over the stored base URL without being
/// written back to disk.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    let settings = if path.exists() {
        load_from_path(&path)?
    } else {
        let defaults = AppSettings::default();
        save_to_path(&defaults, &path)?;
        tracing::info!("Wrote default settings to {}", path.display());
        defaults
    };
    let settings = apply_env_overrides(settings, std::env::var(API_URL_ENV).ok());
    settings.api.parsed_base_url()?;
    Ok(settings)
}

/// Load and normalize settings from a specific file.
pub fn load_from_path(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppSettings>(&text)
        .map(AppSettings::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

pub(super) fn apply_env_overrides(
    mut settings: AppSettings,
    api_url: Option<String>,
) -> AppSettings {
    if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
        tracing::info!("Using API base URL from {API_URL_ENV}: {url}");
        settings.api.base_url = url;
        settings = settings.normalized();
    }
    settings
}
