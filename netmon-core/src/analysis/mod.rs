//! Analytic engine
//!
//! Every stage takes a `&Dataset` (one partition) and returns a fresh result
//! value. Nothing here mutates its input, so stages can share a dataset
//! freely. Per-call derived values such as the hour of day live in locals.

pub mod correlation;
pub mod describe;
mod dispatch;
mod error;
pub mod hourly;
pub mod instability;
pub mod recovery;
#[cfg(test)]
mod tests;

pub use correlation::{
    Classification, Correlation, Direction, RttCorrelations, Strength, correlate_signal_vs_rtt,
    pearson,
};
pub use describe::{ColumnSummary, Summary, describe};
pub use dispatch::{Command, Output, PartitionResult, Report, dispatch};
pub use error::AnalysisError;
pub use hourly::{HourlyMeans, hour_of_day, hourly_mean, hourly_mean_rtt};
pub use instability::{PeakHours, peak_hours};
pub use recovery::{LinkState, RecoveryEvent, RecoveryReport, RecoveryRule, recovery_time};
