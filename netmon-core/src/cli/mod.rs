pub mod analyze;
pub mod conf;

use crate::analysis::AnalysisError;
use crate::conf::ConfigError;
use crate::ingest::IngestError;

/// Human follow-up printed under an error, when one applies.
pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        return conf::config_error_hint(err);
    }

    if let Some(err) = err.downcast_ref::<IngestError>() {
        return Some(match err {
            IngestError::InvalidTimeRange { .. } => {
                "Time bounds use the log's own format, for example:\n\
                 \n\
                 --start \"2024-05-01 08:00:00\" --end \"2024-05-01 18:00:00\"\n\
                 \n\
                 Leave a bound out to keep that side open-ended."
            }
            IngestError::SourceUnavailable { .. } => {
                "Point to the monitor's log with --log <path> or set [log] path in netmon.toml."
            }
        });
    }

    if let Some(err) = err.downcast_ref::<AnalysisError>() {
        return match err {
            AnalysisError::EmptyDataset => Some(
                "No complete samples fell inside the time window. Widen --start/--end \
                 or check that the log contains measured RTT values.",
            ),
            AnalysisError::OrderingViolation { .. } => Some(
                "Recovery analysis needs the log in the order it was written. \
                 Do not concatenate or sort rotated logs out of order.",
            ),
        };
    }

    None
}
