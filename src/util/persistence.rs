//! On-disk persistence of the previous session's query.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde_json::Error as SerdeError;

use crate::domain::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "CarValueScanner";
const APP_NAME: &str = "CarValueScanner";
const SESSION_FILENAME: &str = "session.json";

fn session_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(SESSION_FILENAME))
}

/// Load the previous session, if one was saved and still parses.
pub fn load_persisted_state() -> Option<PersistedState> {
    let path = session_file()?;
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(state) => Some(state),
            Err(e) => {
                println!("[session] Ignoring unreadable session file: {e}");
                None
            }
        },
        Err(e) => {
            println!("[session] Failed to read {}: {e}", path.display());
            None
        }
    }
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = session_file().ok_or(PersistSaveError::StorageUnavailable)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
