//! Batch export handed to the label renderer.
//!
//! CSV has one row per label with the [`LabelRecord`] fields as columns.
//! JSON wraps the records with the batch classification.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use label_model::{Batch, Family, LabelRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Serialize)]
struct BatchDocument<'a> {
    major_name: &'a str,
    major_code: &'a str,
    subtype_code: &'a str,
    family: Family,
    start: u32,
    count: u32,
    labels: &'a [LabelRecord],
}

impl<'a> From<&'a Batch> for BatchDocument<'a> {
    fn from(batch: &'a Batch) -> Self {
        Self {
            major_name: &batch.class.major_name,
            major_code: &batch.class.major_code,
            subtype_code: &batch.class.subtype_code,
            family: batch.class.family,
            start: batch.start,
            count: batch.count,
            labels: &batch.records,
        }
    }
}

pub fn write_csv<W: Write>(batch: &Batch, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for record in batch {
        csv.serialize(record)
            .with_context(|| format!("write CSV row for {}", record.full_serial))?;
    }
    csv.flush().context("flush CSV output")?;
    Ok(())
}

pub fn write_json<W: Write>(batch: &Batch, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &BatchDocument::from(batch))
        .context("write JSON output")?;
    writeln!(writer).context("write JSON output")?;
    Ok(())
}

pub fn write_batch<W: Write>(batch: &Batch, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(batch, writer),
        ExportFormat::Json => write_json(batch, writer),
    }
}

/// Write the export to `path`, or to stdout when `path` is `None`.
pub fn export_batch(batch: &Batch, format: ExportFormat, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create export file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_batch(batch, format, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("write export file {}", path.display()))?;
            Ok(())
        }
        None => write_batch(batch, format, io::stdout().lock()),
    }
}
