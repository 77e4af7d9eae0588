// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::CSV_HEADERS;
use crate::data::Dataset;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    // RFC 4180 line ending
    write!(w, "\r\n")
}

/// Header + one line per (section, slot).
pub fn write_dataset<W: Write>(mut w: W, dataset: &Dataset) -> io::Result<()> {
    write_row(&mut w, &CSV_HEADERS[..], ',')?;
    for row in dataset.rows() {
        write_row(&mut w, row.to_cells().as_slice(), ',')?;
    }
    Ok(())
}

pub fn dataset_to_string(dataset: &Dataset) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_dataset(&mut buf, dataset);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
