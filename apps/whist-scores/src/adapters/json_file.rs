//! Shared file helpers for the JSON adapters.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;

/// Read and parse `path`; `Ok(None)` when the file does not exist.
pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AppError::store_unavailable(format!(
                "reading {}: {e}",
                path.display()
            )))
        }
    };
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| AppError::DataCorruption {
            detail: format!("parsing {}: {e}", path.display()),
        })
}

/// Serialize `value` next to `path` and rename it into place.
pub async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), AppError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = temp_path(path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| unavailable("creating directory", parent, e))?;
    }
    tokio::fs::write(&tmp, &bytes)
        .await
        .map_err(|e| unavailable("writing", &tmp, e))?;
    tokio::fs::rename(&tmp, path)
        .await
        .map_err(|e| unavailable("replacing", path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "JSON file written");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn unavailable(action: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::store_unavailable(format!("{action} {}: {e}", path.display()))
}
