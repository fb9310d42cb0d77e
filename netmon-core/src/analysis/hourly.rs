use crate::analysis::error::AnalysisError;
use crate::dataset::Dataset;
use crate::ingest::types::Column;
use chrono::{NaiveDateTime, Timelike};
use std::collections::BTreeMap;

/// `hour (0..=23) -> mean`, containing only hours that have samples.
pub type HourlyMeans = BTreeMap<u32, f64>;

/// Hour component of a log timestamp, in the log's own local time.
pub fn hour_of_day(timestamp: &NaiveDateTime) -> u32 {
    timestamp.hour()
}

pub fn hourly_mean(dataset: &Dataset, column: Column) -> Result<HourlyMeans, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let mut acc: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for sample in dataset {
        let entry = acc.entry(hour_of_day(&sample.timestamp)).or_default();
        entry.0 += sample.value(column);
        entry.1 += 1;
    }

    Ok(acc
        .into_iter()
        .map(|(hour, (sum, n))| (hour, sum / n as f64))
        .collect())
}

/// Mean median-RTT per hour of day.
pub fn hourly_mean_rtt(dataset: &Dataset) -> Result<HourlyMeans, AnalysisError> {
    hourly_mean(dataset, Column::RttMed)
}
