// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! The first source that yields a directory wins:
//!
//! 1. an explicit override passed to [`get_app_config_dir_with_override`]
//! 2. the `--config-dir` CLI argument, recorded by [`init_cli_override`]
//! 3. the `FLOORPIN_CONFIG_DIR` environment variable, when non-empty
//! 4. `FloorPin/` under the platform config directory

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_NAME: &str = "FloorPin";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "FLOORPIN_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument. Only the first call counts.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("--config-dir already recorded; ignoring later value");
    }
}

/// Config directory from the CLI, the environment or the platform default.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`], but `override_path` beats every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().cloned().flatten(),
        std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from),
        dirs::config_dir(),
    )
}

/// Picks the config directory from already-gathered sources.
fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env: Option<PathBuf>,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or(env.filter(|path| !path.as_os_str().is_empty()))
        .or_else(|| platform.map(|base| base.join(APP_NAME)))
}
