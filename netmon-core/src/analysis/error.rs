use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("no samples to analyse")]
    EmptyDataset,

    #[error(
        "samples are not in chronological order: sample {index} at {current} follows {previous}"
    )]
    OrderingViolation {
        index: usize,
        previous: NaiveDateTime,
        current: NaiveDateTime,
    },
}
