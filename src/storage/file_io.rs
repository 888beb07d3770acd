//! File I/O utilities with atomic writes
//!
//! Reads tell apart a missing file, an unreadable file and a file whose
//! contents don't parse, so the store can pick the right fallback.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

/// Read JSON from a file, returning a default value if the file doesn't exist
///
/// Parse failures become [`BudgetError::CorruptData`]; any other I/O failure
/// becomes [`BudgetError::StorageUnavailable`].
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(BudgetError::storage_unavailable(path, e)),
    };

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            BudgetError::storage_unavailable(path, e)
        } else {
            BudgetError::corrupt_data(path, e)
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left as it was.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::storage_unavailable(
                path,
                format!("failed to create directory {}: {}", parent.display(), e),
            )
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| {
        BudgetError::storage_unavailable(path, format!("failed to create temp file: {}", e))
    })?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::storage_unavailable(path, format!("failed to serialize data: {}", e))
    })?;

    writer.flush().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::storage_unavailable(path, format!("failed to flush data: {}", e))
    })?;

    writer.get_ref().sync_all().map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::storage_unavailable(path, format!("failed to sync data: {}", e))
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::storage_unavailable(path, format!("failed to rename temp file: {}", e))
    })?;

    Ok(())
}
