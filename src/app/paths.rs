// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these that is set wins:
//! 1. a path passed to [`get_app_config_dir_with_override`]
//! 2. `--config-dir`, recorded once by [`init_cli_override`]
//! 3. the `RETOUCH_CONFIG_DIR` environment variable, when non-empty
//! 4. `Retouch` under the platform config directory

use std::path::PathBuf;
use std::sync::OnceLock;

/// Folder name under the platform config directory.
const APP_NAME: &str = "Retouch";

/// Environment variable naming an alternative config directory.
pub const ENV_CONFIG_DIR: &str = "RETOUCH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Resolved config directory, preferring `override_path` when given,
/// e.g. `~/.config/Retouch` on Linux.
///
/// `None` only when no override is set and the platform has no config
/// directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
