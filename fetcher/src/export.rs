use crate::models::{FlatRow, FLAT_ROW_COLUMNS};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `rows` as BOM-prefixed, comma-delimited CSV with a header row.
pub fn write_rows<W: Write>(mut writer: W, rows: &[FlatRow]) -> Result<()> {
    writer.write_all(UTF8_BOM)?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    // Written by hand so an empty dataset still gets its header.
    csv_writer.write_record(FLAT_ROW_COLUMNS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    let mut writer = csv_writer.into_inner().map_err(|e| e.into_error())?;
    writer.flush()?;
    Ok(())
}

pub fn save_to_csv(path: &Path, rows: &[FlatRow]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_rows(BufWriter::new(file), rows)
        .with_context(|| format!("Failed to write {}", path.display()))
}
