// CozyTab platform paths
// Resolves where the state database lives on Windows, macOS, and Linux.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV_VAR: &str = "COZYTAB_DATA_DIR";

/// File name of the state database inside the data directory.
pub const DB_FILE_NAME: &str = "cozytab.db";

/// Returns the platform-specific data directory for CozyTab.
///
/// - **Linux**: `$XDG_DATA_HOME/cozytab` or `~/.local/share/cozytab`
/// - **macOS**: `~/Library/Application Support/CozyTab`
/// - **Windows**: `%APPDATA%/CozyTab`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
        PathBuf::from(appdata).join("CozyTab")
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("CozyTab")
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("cozytab"),
            _ => home_dir().join(".local").join("share").join("cozytab"),
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Database path inside `data_dir_override`, or inside the platform data dir.
pub fn db_path_in(data_dir_override: Option<&Path>) -> PathBuf {
    match data_dir_override {
        Some(dir) => dir.join(DB_FILE_NAME),
        None => get_data_dir().join(DB_FILE_NAME),
    }
}

/// Database path honouring `COZYTAB_DATA_DIR`.
pub fn resolve_db_path() -> PathBuf {
    let override_dir = env::var_os(DATA_DIR_ENV_VAR).map(PathBuf::from);
    db_path_in(override_dir.as_deref())
}
