use crate::analysis::error::AnalysisError;
use crate::dataset::Dataset;
use crate::ingest::types::Sample;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// Packet loss at or above the threshold.
    Failing,
    Ok,
}

impl LinkState {
    pub fn of(sample: &Sample, threshold_pct: u32) -> Self {
        if sample.packet_loss_pct >= threshold_pct {
            LinkState::Failing
        } else {
            LinkState::Ok
        }
    }
}

/// Which earlier sample a recovering sample is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryRule {
    /// Sample `i-1` failing and sample `i` ok
    #[default]
    Adjacent,

    /// Sample `i-2` failing and sample `i` ok (historical analyzer behaviour)
    Lagged,
}

impl RecoveryRule {
    fn lag(self) -> usize {
        match self {
            RecoveryRule::Adjacent => 1,
            RecoveryRule::Lagged => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecoveryEvent {
    /// Position of the recovered sample within the partition.
    pub index: usize,
    pub failed_at: NaiveDateTime,
    pub recovered_at: NaiveDateTime,
    pub duration_secs: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecoveryReport {
    NoEvents,
    Observed {
        events: Vec<RecoveryEvent>,
        mean_secs: f64,
    },
}

impl RecoveryReport {
    pub fn events(&self) -> &[RecoveryEvent] {
        match self {
            RecoveryReport::NoEvents => &[],
            RecoveryReport::Observed { events, .. } => events,
        }
    }

    pub fn mean_secs(&self) -> Option<f64> {
        match self {
            RecoveryReport::NoEvents => None,
            RecoveryReport::Observed { mean_secs, .. } => Some(*mean_secs),
        }
    }
}

/// Mean time between a failing sample and the sample that recovers from it.
///
/// The dataset is walked in its stored order and never re-sorted. Every step
/// must move forward in time (or stay put); a backwards step is reported as
/// [`AnalysisError::OrderingViolation`]. The duration of a recovery is always
/// the gap between the recovered sample and its immediate predecessor.
pub fn recovery_time(
    dataset: &Dataset,
    threshold_pct: u32,
    rule: RecoveryRule,
) -> Result<RecoveryReport, AnalysisError> {
    let samples = dataset.samples();
    if samples.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let lag = rule.lag();
    let mut events = Vec::new();

    for (index, pair) in samples.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
        let (previous, current) = (&pair[0], &pair[1]);

        let duration_secs = (current.timestamp - previous.timestamp).num_seconds();
        if duration_secs < 0 {
            return Err(AnalysisError::OrderingViolation {
                index,
                previous: previous.timestamp,
                current: current.timestamp,
            });
        }

        let Some(reference) = index.checked_sub(lag).map(|j| &samples[j]) else {
            continue;
        };

        if LinkState::of(reference, threshold_pct) == LinkState::Failing
            && LinkState::of(current, threshold_pct) == LinkState::Ok
        {
            events.push(RecoveryEvent {
                index,
                failed_at: previous.timestamp,
                recovered_at: current.timestamp,
                duration_secs,
            });
        }
    }

    if events.is_empty() {
        return Ok(RecoveryReport::NoEvents);
    }

    let total: i64 = events.iter().map(|e| e.duration_secs).sum();
    let mean_secs = total as f64 / events.len() as f64;

    Ok(RecoveryReport::Observed { events, mean_secs })
}
