//! Runtime settings for the command line front end

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "WORDBRIDGE_DATA_DIR";

/// Name of the data directory looked up next to the executable
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory containing `Languages/`
    pub data_dir: PathBuf,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings from command line values and the process environment
    pub fn resolve(data_dir_flag: Option<&Path>, verbose: bool) -> Self {
        let env_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let data_dir = resolve_data_dir(data_dir_flag, env_dir.as_deref(), exe_dir.as_deref());
        debug!("Using data directory '{}'", data_dir.display());
        Settings { data_dir, verbose }
    }
}

/// Pick the data directory
///
/// Precedence: explicit flag, then the environment variable, then a `data`
/// directory next to the executable if one exists, then `./data`.
pub fn resolve_data_dir(
    flag: Option<&Path>,
    env_dir: Option<&Path>,
    exe_dir: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = env_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir.to_path_buf();
    }
    if let Some(candidate) = exe_dir.map(|d| d.join(DEFAULT_DATA_DIR)) {
        if candidate.is_dir() {
            return candidate;
        }
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}
