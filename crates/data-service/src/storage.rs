//! Flat JSON file store backing the save endpoint.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;

/// Default file written by the save endpoint, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "saved_data.json";

const INDENT: &[u8] = b"    ";

/// Errors from writing the save file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Serialize(#[from] serde_json::Error),

    #[error("write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Overwrites a single JSON file with each saved document.
///
/// Writes are serialized by an in-process lock that is held until the
/// blocking write finishes, even if the caller is dropped first. They are
/// not atomic, so a crash mid-write can leave a truncated file behind.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with `document`, pretty-printed.
    pub async fn save(&self, document: Map<String, Value>) -> Result<(), StoreError> {
        let guard = self.lock.clone().lock_owned().await;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            write_pretty(&path, &document)
        })
        .await??;
        Ok(())
    }
}

impl Default for JsonStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

/// Serialize `value` to `path` with four-space indentation, truncating any
/// previous contents.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let file = File::create(path)?;
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(BufWriter::new(file), formatter);
    value.serialize(&mut ser)?;
    ser.into_inner().flush()?;
    Ok(())
}
