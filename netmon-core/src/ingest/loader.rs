use crate::dataset::{Dataset, TimeWindow};
use crate::ingest::error::{IngestError, ParseError};
use crate::ingest::parse::parse_line;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Default location the monitor appends to.
pub const DEFAULT_LOG_PATH: &str = "/var/log/netmon/netmon.log";

/// Line accounting for one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    pub lines: usize,
    pub rejected: usize,
    pub outside_window: usize,
    pub incomplete: usize,
    pub retained: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub dataset: Dataset,
    pub stats: IngestStats,
}

/// Extracts a dataset from `path` within the user-supplied time bounds.
///
/// The bounds are validated before the file is opened, so an invalid range
/// yields an error and never a partially filtered dataset.
pub fn extract(
    path: &Path,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<Extraction, IngestError> {
    let window = TimeWindow::from_bounds(start, end)?;
    extract_file(path, &window)
}

pub fn extract_file(path: &Path, window: &TimeWindow) -> Result<Extraction, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::source_unavailable(path, e))?;
    let extraction = extract_from_reader(BufReader::new(file), window)
        .map_err(|e| IngestError::source_unavailable(path, e))?;

    let stats = &extraction.stats;
    tracing::info!(
        path = %path.display(),
        lines = stats.lines,
        rejected = stats.rejected,
        outside_window = stats.outside_window,
        incomplete = stats.incomplete,
        retained = stats.retained,
        "log extraction complete"
    );

    Ok(extraction)
}

/// Scans a full line stream. Only I/O failures abort the scan; grammar
/// failures and incomplete records are counted and skipped.
pub fn extract_from_reader<R: BufRead>(
    reader: R,
    window: &TimeWindow,
) -> io::Result<Extraction> {
    let mut stats = IngestStats::default();
    let mut samples = Vec::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line_no = idx + 1;
        stats.lines += 1;

        let record = match std::str::from_utf8(&raw)
            .map_err(|_| ParseError::NotUtf8)
            .and_then(parse_line)
        {
            Ok(record) => record,
            Err(reason) => {
                tracing::debug!(line = line_no, %reason, "rejected log line");
                stats.rejected += 1;
                continue;
            }
        };

        if !window.contains(&record.timestamp) {
            stats.outside_window += 1;
            continue;
        }

        match record.into_sample() {
            Some(sample) => samples.push(sample),
            None => {
                tracing::debug!(line = line_no, "dropped sample with unmeasured RTT");
                stats.incomplete += 1;
            }
        }
    }

    stats.retained = samples.len();

    Ok(Extraction {
        dataset: Dataset::new(samples),
        stats,
    })
}
