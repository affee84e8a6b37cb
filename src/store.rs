// src/store.rs
//
// Stage files on disk. Every stage reads one or more CSVs with a header row
// and writes its own; rows map onto the `posting` types through serde.

use std::{fs, io::Write, path::Path};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Read every row of `path`. A missing file is `Error::MissingInput`.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut out = Vec::new();
    for row in reader.deserialize() {
        out.push(row?);
    }
    logd!("Store: read {} rows from {}", out.len(), path.display());
    Ok(out)
}

/// Overwrite `path` with a header row and one row per record.
pub fn save_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = csv::Writer::from_path(path)?;
    for r in records {
        writer.serialize(r)?;
    }
    writer.flush()?;
    logf!("Store: wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

/// Plain text output (figures).
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())?;
    Ok(())
}
