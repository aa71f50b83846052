//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "formcheck";
const APPLICATION: &str = "formcheck";

/// Maximum number of archived logs to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "formcheck-";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/formcheck` or `~/.config/formcheck`
/// - macOS: `~/Library/Application Support/dev.formcheck.formcheck`
/// - Windows: `C:\Users\<User>\AppData\Roaming\formcheck\formcheck\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the cache directory, where logs live.
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default location of the validation settings file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log and prune old archives.
///
/// Only used for the default log location; an explicit `--log-file` is
/// truncated in place. Call this before creating the new log file.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, MAX_OLD_LOGS);
    }
}

/// Rename `latest.log` in `dir` to `formcheck-<timestamp>.log`, then keep the
/// newest `keep` archives.
fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        let archived = dir.join(format!("{ARCHIVE_PREFIX}{timestamp}.log"));
        if let Err(e) = fs::rename(&latest, &archived) {
            log::warn!("Could not archive {}: {}", latest.display(), e);
        }
    }

    let Ok(entries) = fs::read_dir(dir) else { return };
    // Timestamps sort lexicographically, oldest first.
    let mut archives: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|path| is_archive(path))
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        let _ = fs::remove_file(path);
    }
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}
