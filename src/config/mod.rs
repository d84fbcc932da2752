//! Persisted client settings stored as TOML in the app directory.

mod errors;
mod load;
mod save;
mod types;


/// Filename of the settings file inside the app directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Environment variable overriding `api.base_url` at load time.
pub const API_URL_ENV: &str = "PCREC_API_URL";

pub use errors::ConfigError;
pub use load::{config_path, load_or_default, load_from_path};
pub use save::save_to_path;
pub use types::{ApiSettings, AppSettings, FeatureFlags};

fn map_app_dir_error(error: crate::app_dirs::AppDirError) -> ConfigError {
    match error {
        crate::app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        crate::app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
