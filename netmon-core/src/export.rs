//! CSV export of retained samples.
//!
//! Columns: `timestamp, network, signal, packet_loss, rtt_min, rtt_med,
//! rtt_max, rtt_dev`, with a header row. Partitions are written in label order.

use crate::dataset::Partitions;
use crate::ingest::types::{Sample, TIMESTAMP_FORMAT};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Flush(#[from] std::io::Error),
}

#[derive(Serialize)]
struct CsvRow<'a> {
    timestamp: String,
    network: Option<&'a str>,
    signal: u32,
    packet_loss: u32,
    rtt_min: f64,
    rtt_med: f64,
    rtt_max: f64,
    rtt_dev: f64,
}

impl<'a> From<&'a Sample> for CsvRow<'a> {
    fn from(s: &'a Sample) -> Self {
        Self {
            timestamp: s.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            network: s.network.as_deref(),
            signal: s.signal_pct,
            packet_loss: s.packet_loss_pct,
            rtt_min: s.rtt.min,
            rtt_med: s.rtt.med,
            rtt_max: s.rtt.max,
            rtt_dev: s.rtt.dev,
        }
    }
}

/// Writes every partition's samples and returns the number of rows written.
pub fn write_csv<W: Write>(writer: W, partitions: &Partitions) -> Result<usize, ExportError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let mut rows = 0;
    for dataset in partitions.values() {
        for sample in dataset {
            csv.serialize(CsvRow::from(sample))?;
            rows += 1;
        }
    }

    // An empty export still carries the header row.
    if rows == 0 {
        csv.write_record([
            "timestamp",
            "network",
            "signal",
            "packet_loss",
            "rtt_min",
            "rtt_med",
            "rtt_max",
            "rtt_dev",
        ])?;
    }

    csv.flush()?;
    Ok(rows)
}

pub fn export_csv(path: &Path, partitions: &Partitions) -> Result<usize, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = write_csv(file, partitions)?;
    tracing::info!(path = %path.display(), rows, "exported samples to CSV");
    Ok(rows)
}
