pub mod constants;
pub mod logging;
mod macros;

use std::path::PathBuf;

use log::trace;

/// The directory logs are written to when no
/// `--log-out` directory is given.
///
/// Resolves to `$XDG_CACHE_HOME/kiwi-boot` (or the platform
/// equivalent) and falls back to a relative `.kiwi-boot` directory
/// when no home directory can be determined.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    trace!("default_log_dir()");

    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(constants::FALLBACK_LOG_DIR),
        |base_dirs| base_dirs.cache_dir().join(constants::APP_NAME),
    )
}
