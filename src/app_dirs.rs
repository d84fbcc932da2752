//! Where pcrec keeps its files on disk.
//!
//! Everything sits under a single `.pcrec` folder in the OS config directory
//! (`%APPDATA%` on Windows, `~/.config` on Linux). Setting `PCREC_CONFIG_HOME`
//! moves that base, which portable installs and the integration tests rely on.

use std::path::PathBuf;
use std::sync::Mutex;

use directories::BaseDirs;
use thiserror::Error;

/// Name of the application directory that lives under the OS config root.
pub const APP_DIR_NAME: &str = ".pcrec";
/// Environment variable that overrides the base config directory.
pub const CONFIG_HOME_ENV: &str = "PCREC_CONFIG_HOME";

static BASE_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

#[derive(Debug, Error)]
pub enum AppDirError {
    #[error("No suitable base config directory available for application files")]
    NoBaseDir,
    #[error("Failed to create application directory at {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Folders the client writes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppDir {
    /// `.pcrec` itself; holds `config.toml`.
    Root,
    /// Per-launch log files.
    Logs,
}

impl AppDir {
    /// Resolve the folder, creating it and any missing parents.
    pub fn ensure(self) -> Result<PathBuf, AppDirError> {
        let mut path = base_dir().ok_or(AppDirError::NoBaseDir)?.join(APP_DIR_NAME);
        if self == Self::Logs {
            path.push("logs");
        }
        match std::fs::create_dir_all(&path) {
            Ok(()) => Ok(path),
            Err(source) => Err(AppDirError::CreateDir { path, source }),
        }
    }
}

/// Test override, then `PCREC_CONFIG_HOME`, then the platform config dir.
fn base_dir() -> Option<PathBuf> {
    let overridden = BASE_OVERRIDE.lock().ok().and_then(|slot| slot.clone());
    overridden
        .or_else(|| {
            std::env::var_os(CONFIG_HOME_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| BaseDirs::new().map(|dirs| dirs.config_dir().to_path_buf()))
}

/// Points [`AppDir`] at a temporary base while held.
///
/// Tests holding one run one at a time.
#[cfg(test)]
pub(crate) struct ConfigBaseGuard {
    _serial: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ConfigBaseGuard {
    pub(crate) fn set(path: PathBuf) -> Self {
        static SERIAL: Mutex<()> = Mutex::new(());
        let serial = SERIAL.lock().unwrap_or_else(|err| err.into_inner());
        *BASE_OVERRIDE.lock().unwrap_or_else(|err| err.into_inner()) = Some(path);
        Self { _serial: serial }
    }
}

#[cfg(test)]
impl Drop for ConfigBaseGuard {
    fn drop(&mut self) {
        *BASE_OVERRIDE.lock().unwrap_or_else(|err| err.into_inner()) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn root_and_logs_live_under_the_override() {
        let base = tempdir().unwrap();
        let _guard = ConfigBaseGuard::set(base.path().to_path_buf());

        let root = AppDir::Root.ensure().unwrap();
        assert_eq!(root, base.path().join(APP_DIR_NAME));
        assert!(root.is_dir());

        let logs = AppDir::Logs.ensure().unwrap();
        assert_eq!(logs, root.join("logs"));
        assert!(logs.is_dir());
    }

    #[test]
    fn blocked_path_reports_create_error() {
        let base = tempdir().unwrap();
        let file = base.path().join("not-a-dir");
        std::fs::write(&file, b"").unwrap();
        let _guard = ConfigBaseGuard::set(file);

        let err = AppDir::Logs.ensure().unwrap_err();
        assert!(matches!(err, AppDirError::CreateDir { .. }));
    }
}
