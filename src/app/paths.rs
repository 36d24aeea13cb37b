// SPDX-License-Identifier: MPL-2.0
//! Where the storefront keeps its files.
//!
//! Two directories matter: the config directory (`settings.toml`) and the
//! data directory (default `catalog.toml` and product images). Both resolve
//! in the same order:
//!
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI argument** `--config-dir` / `--data-dir`, recorded by [`init_cli_overrides`]
//! 3. **Environment variable** [`ENV_CONFIG_DIR`] / [`ENV_DATA_DIR`], if non-empty
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config and data roots.
pub const APP_NAME: &str = "EvergreenStorefront";

pub const ENV_DATA_DIR: &str = "EVERGREEN_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "EVERGREEN_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum Location {
    Config,
    Data,
}

impl Location {
    fn cli(self) -> Option<PathBuf> {
        let cell = match self {
            Location::Config => &CLI_CONFIG_DIR,
            Location::Data => &CLI_DATA_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            Location::Config => ENV_CONFIG_DIR,
            Location::Data => ENV_DATA_DIR,
        }
    }

    fn platform_root(self) -> Option<PathBuf> {
        match self {
            Location::Config => dirs::config_dir(),
            Location::Data => dirs::data_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        override_path
            .or_else(|| self.cli())
            .or_else(|| {
                std::env::var(self.env_var())
                    .ok()
                    .filter(|value| !value.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.platform_root().map(|root| root.join(APP_NAME)))
    }
}

/// Records the `--data-dir` / `--config-dir` CLI arguments.
///
/// Call once at startup, before any path is resolved. Later calls are
/// ignored.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("CLI path overrides were already initialized; keeping the first values");
    }
}

/// Data directory: default catalog file and product images.
///
/// Returns `None` only when the platform has no data directory and nothing
/// overrides it.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Location::Data.resolve(override_path)
}

/// Config directory: `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Location::Config.resolve(override_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests touching process env vars must not run in parallel.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn default_dirs_end_with_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);
        std::env::remove_var(ENV_CONFIG_DIR);

        for path in [get_app_data_dir(), get_app_config_dir()].into_iter().flatten() {
            assert!(path.ends_with(APP_NAME), "{} lacks app name", path.display());
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/data");

        let custom = PathBuf::from("/custom/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(custom.clone())),
            Some(custom.clone())
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(custom.clone())),
            Some(custom)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/srv/evergreen/config");

        assert_eq!(
            get_app_config_dir(),
            Some(PathBuf::from("/srv/evergreen/config"))
        );

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        if let Some(path) = get_app_data_dir() {
            assert!(path.ends_with(APP_NAME));
        }

        std::env::remove_var(ENV_DATA_DIR);
    }
}
