//! JSON-file backed stores for the weather tool.
//!
//! Each store is read once when opened and rewritten in full after every
//! mutation. Writes go through a sibling temp file renamed over the target.
//! Read and write failures are logged and swallowed: the store degrades to
//! its default contents instead of failing the command.

pub mod favorites;
pub mod history;
pub mod preferences;

use crate::errors::PersistenceError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "search_history.json";
pub const FAVORITES_FILE: &str = "favorite_cities.json";
pub const PREFERENCES_FILE: &str = "user_preferences.json";

/// Read a JSON document. A missing file yields `T::default()`.
pub fn read_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T, PersistenceError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(source) => {
            return Err(PersistenceError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| PersistenceError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// Like [`read_json`], but any failure is logged and replaced by the default.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    read_json(path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable store, starting empty");
        T::default()
    })
}

/// Serialize `value` and replace `path` with it.
pub fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), PersistenceError> {
    let io_err = |source| PersistenceError::Io {
        path: path.display().to_string(),
        source,
    };

    let json = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Json {
        path: path.display().to_string(),
        source,
    })?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;
    file.sync_all().map_err(io_err)?;
    drop(file);

    fs::rename(&tmp, path).map_err(io_err)
}

/// Persist and swallow the error after logging it.
pub(crate) fn persist<T: Serialize + ?Sized>(path: &Path, value: &T) {
    if let Err(e) = write_json_atomic(path, value) {
        tracing::warn!(error = %e, "failed to save store");
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
