//! Netmon log ingestion
//!
//! The monitor appends one line per measurement:
//!
//! ```text
//! <timestamp> - network=<ssid|None>  signal=<int>%  packet-loss=<int>%
//!   rtt-min=<float|null> ms  rtt-med=<float|null> ms  rtt-max=<float|null> ms  rtt-dev=<float|null> ms
//! ```
//!
//! The data flow is:
//!
//! log file
//! parse_line
//! LogRecord
//! TimeWindow / into_sample
//! Dataset
//!
//! Lines that do not match the grammar are skipped, and records missing any
//! RTT value are dropped after parsing. Neither interrupts the scan.

pub mod error;
mod loader;
mod parse;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::{IngestError, ParseError};
pub use loader::{
    DEFAULT_LOG_PATH, Extraction, IngestStats, extract, extract_file, extract_from_reader,
};
pub use parse::{parse_line, parse_timestamp};
pub use types::{Column, LogRecord, Rtt, Sample};
