use chrono::NaiveDateTime;
use netmon_core::dataset::TimeWindow;
use netmon_core::ingest::{Extraction, LogRecord, Rtt, extract_file, parse_timestamp};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A netmon log written to a private temp directory.
///
/// The directory is removed when the fixture is dropped.
pub struct LogFixture {
    dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("netmon.log");

        let mut contents = String::new();
        for line in lines {
            contents.push_str(line.as_ref());
            contents.push('\n');
        }
        fs::write(&path, contents).expect("failed to write log fixture");

        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path inside the fixture's directory, for outputs.
    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Extracts with a window wide enough to cover any fixture.
    pub fn extract_all(&self) -> Extraction {
        let window = TimeWindow::new(at("2000-01-01 00:00:00"), at("2100-01-01 00:00:00"));
        extract_file(&self.path, &window).expect("fixture log should be readable")
    }
}

fn at(timestamp: &str) -> NaiveDateTime {
    parse_timestamp(timestamp).expect("fixture timestamp")
}

/// A complete log line. The other RTT columns are derived from `rtt_med`.
pub fn measured(
    timestamp: &str,
    network: Option<&str>,
    signal_pct: u32,
    packet_loss_pct: u32,
    rtt_med: f64,
) -> String {
    LogRecord {
        timestamp: at(timestamp),
        network: network.map(str::to_string),
        signal_pct,
        packet_loss_pct,
        rtt: Rtt {
            min: Some(rtt_med / 2.0),
            med: Some(rtt_med),
            max: Some(rtt_med * 2.0),
            dev: Some(rtt_med / 4.0),
        },
    }
    .to_string()
}

/// A line written while nothing could be measured.
pub fn unmeasured(timestamp: &str, network: Option<&str>) -> String {
    LogRecord {
        timestamp: at(timestamp),
        network: network.map(str::to_string),
        signal_pct: 0,
        packet_loss_pct: 100,
        rtt: Rtt {
            min: None,
            med: None,
            max: None,
            dev: None,
        },
    }
    .to_string()
}
