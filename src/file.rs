// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::config::consts::TIMESTAMP_FMT;
use crate::config::options::ExportOptions;
use crate::csv::write_dataset;
use crate::data::Dataset;
use crate::error::{Result, ScrapeError};

/// Write the dataset to `<out_dir>/<prefix>_<now>.csv`, creating the folder
/// if needed. Returns the path written.
pub fn write_export(export: &ExportOptions, dataset: &Dataset) -> Result<PathBuf> {
    let timestamp = Local::now().format(TIMESTAMP_FMT).to_string();
    write_export_at(export, dataset, &timestamp)
}

/// Same as `write_export` with a fixed timestamp string.
pub fn write_export_at(export: &ExportOptions, dataset: &Dataset, timestamp: &str) -> Result<PathBuf> {
    ensure_directory(&export.out_dir)?;
    let path = export.out_path(timestamp);

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_dataset(&mut out, dataset)?;
    out.flush()?;

    tracing::info!(path = %path.display(), rows = dataset.slot_count(), "export written");
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
