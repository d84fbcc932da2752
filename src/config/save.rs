use std::io::Write;
use std::path::Path;

use rand::TryRngCore;

use super::ConfigError;
use super::types::AppSettings;

const TEMP_NAME_ATTEMPTS: usize = 5;

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &AppSettings, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(settings).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, data.as_bytes())
}

/// Write through a uniquely named sibling file and rename it into place.
fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let write_err = |path: &Path, source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
        return Err(write_err(
            path,
            std::io::Error::other("config path has no parent directory or file name"),
        ));
    };

    for _ in 0..TEMP_NAME_ATTEMPTS {
        let tmp_path = dir.join(format!(
            "{}.tmp-{}",
            file_name.to_string_lossy(),
            random_suffix().map_err(|err| write_err(path, err))?
        ));
        let mut file = match std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(write_err(&tmp_path, err)),
        };
        let written = file.write_all(data).and_then(|_| file.sync_all());
        drop(file);
        if let Err(err) = written.and_then(|_| replace_file(&tmp_path, path)) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(write_err(path, err));
        }
        return Ok(());
    }

    Err(write_err(
        path,
        std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "failed to allocate a temporary settings file",
        ),
    ))
}

fn random_suffix() -> Result<String, std::io::Error> {
    let mut bytes = [0u8; 6];
    rand::rngs::OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|err| std::io::Error::other(format!("failed to generate temp suffix: {err}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

fn replace_file(temp_path: &Path, path: &Path) -> Result<(), std::io::Error> {
    match std::fs::rename(temp_path, path) {
        Ok(()) => Ok(()),
        #[cfg(target_os = "windows")]
        Err(err)
            if err.kind() == std::io::ErrorKind::AlreadyExists
                || err.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            if let Err(inner) = std::fs::remove_file(path)
                && inner.kind() != std::io::ErrorKind::NotFound
            {
                return Err(inner);
            }
            std::fs::rename(temp_path, path)
        }
        Err(err) => Err(err),
    }
}
