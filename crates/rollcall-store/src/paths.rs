use crate::error::{Result, StoreError};
use std::env;
use std::path::{Path, PathBuf};

pub const ROSTER_FILENAME: &str = "registered_students.csv";

/// Resolves the roster file location: an explicit path wins, otherwise the
/// file lives next to wherever the tool is run from.
pub fn resolve_roster_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidRosterPath(path));
            }
            Ok(path)
        }
        None => Ok(env::current_dir()?.join(ROSTER_FILENAME)),
    }
}

pub fn roster_path_in(dir: &Path) -> PathBuf {
    dir.join(ROSTER_FILENAME)
}
