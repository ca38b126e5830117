use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::HookConfig;
use crate::error::ConfigError;
use crate::file::read_config_file;

/// Walks up from `start_dir` looking for `pushgate.toml`.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigRead`] if `start_dir` cannot be resolved.
pub fn discover_config(start_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ConfigError::ConfigRead {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let mut current = Some(start_dir.as_path());
    while let Some(dir) = current {
        let candidate = dir.join(crate::CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
        current = dir.parent();
    }

    Ok(None)
}

/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or names invalid issue keys.
pub fn load_config(path: &Path) -> Result<HookConfig, ConfigError> {
    let file = read_config_file(path)?;
    HookConfig::from_file(file)
}

/// Loads the explicit config file if given, otherwise the nearest `pushgate.toml`
/// above `start_dir`. Without any file every policy is disabled.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be loaded.
pub fn load_hook_config(start_dir: &Path, explicit: Option<&Path>) -> Result<HookConfig, ConfigError> {
    resolve_hook_config(start_dir, explicit).map(|(_, config)| config)
}

/// Like [`load_hook_config`], also returning the file the configuration came
/// from, or `None` when no file was found.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be loaded.
pub fn resolve_hook_config(
    start_dir: &Path,
    explicit: Option<&Path>,
) -> Result<(Option<PathBuf>, HookConfig), ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(start_dir)?,
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading hook configuration");
            let config = load_config(&path)?;
            Ok((Some(path), config))
        }
        None => {
            debug!(start_dir = %start_dir.display(), "no pushgate.toml found, all policies disabled");
            Ok((None, HookConfig::default()))
        }
    }
}
