// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::store::{CountryDataset, CountryRecord};

/// Write the dataset as one pretty-printed JSON array of records.
/// Creates/truncates the file, so a second run replaces the first.
pub fn write_json(path: &Path, dataset: &CountryDataset) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    dataset.records.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    out.flush()?;
    logf!("wrote {}", path.display());
    Ok(())
}

/// Read back a file written by [`write_json`].
pub fn load_json(path: &Path) -> Result<Vec<CountryRecord>, Box<dyn std::error::Error>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
