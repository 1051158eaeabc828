//! JSON file storage implementation
//!
//! Each counter lives in its own file holding a single object, `{"count":<integer>}`.
//! Unknown fields are ignored and a missing `count` field reads as 0. Hand-edited
//! files may also hold the count as a float (truncated toward zero) or as a
//! decimal string; numbers outside the `i64` range saturate at its bounds. Writes go
//! straight to the target file: there is no rename or fsync, so a crash in the
//! middle of a save can leave a truncated file behind, which the next load
//! reports as a decode error.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{de, Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::trace;

use super::traits::Storage;

/// Errors that can occur while reading or writing a counter file
#[derive(Debug, Error)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed counter file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode counter value: {0}")]
    Encode(#[source] serde_json::Error),
}

/// On-disk shape of a counter file
#[derive(Debug, Default, Serialize, Deserialize)]
struct CounterRecord {
    #[serde(default, deserialize_with = "deserialize_count")]
    count: i64,
}

/// Forms accepted for the `count` field
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawCount::deserialize(deserializer)? {
        RawCount::Signed(count) => Ok(count),
        RawCount::Unsigned(count) => Ok(i64::try_from(count).unwrap_or(i64::MAX)),
        // `as` saturates at the i64 bounds
        RawCount::Float(count) if count.is_finite() => Ok(count.trunc() as i64),
        RawCount::Float(count) => Err(de::Error::custom(format!("count is not finite: {count}"))),
        RawCount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("count is not an integer: {text:?}"))),
    }
}

/// Whether a read error means there is no file to read
///
/// A regular file used as a parent directory reports `NotADirectory`. Anything
/// else, permission errors included, is a real failure.
fn is_missing(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> FileStorageError {
        FileStorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parent(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}

impl Storage for JsonFileStorage {
    type Error = FileStorageError;

    fn load(&self) -> Result<Option<i64>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if is_missing(&e) => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        let record: CounterRecord =
            serde_json::from_str(&contents).map_err(|source| FileStorageError::Decode {
                path: self.path.clone(),
                source,
            })?;

        Ok(Some(record.count))
    }

    fn save(&self, value: i64) -> Result<(), Self::Error> {
        if let Some(parent) = self.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let contents =
            serde_json::to_string(&CounterRecord { count: value }).map_err(FileStorageError::Encode)?;
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))?;

        trace!(path = %self.path.display(), value, "Wrote counter file");
        Ok(())
    }

    fn health_check(&self) -> Result<bool, Self::Error> {
        if self.path.is_dir() {
            return Ok(false);
        }

        match self.parent() {
            Some(parent) if parent.exists() => {
                let metadata = fs::metadata(parent).map_err(|e| self.io_error(e))?;
                Ok(metadata.is_dir() && !metadata.permissions().readonly())
            }
            // Missing directories are created on the first save
            _ => Ok(true),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
