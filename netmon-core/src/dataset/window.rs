use crate::ingest::error::IngestError;
use crate::ingest::parse_timestamp;
use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Closed interval `[start, end]` of log timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Builds a window from user input, relative to the current local time.
    ///
    /// An absent or blank bound is open-ended: the start defaults to the Unix
    /// epoch and the end to "now". A bound that is present but unparseable is
    /// an error, never a silent fallback.
    pub fn from_bounds(start: Option<&str>, end: Option<&str>) -> Result<Self, IngestError> {
        Self::from_bounds_at(start, end, Local::now().naive_local())
    }

    pub fn from_bounds_at(
        start: Option<&str>,
        end: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<Self, IngestError> {
        let start = parse_bound("start", start)?.unwrap_or(DateTime::<Utc>::UNIX_EPOCH.naive_utc());
        let end = parse_bound("end", end)?.unwrap_or(now);

        if start > end {
            tracing::warn!(%start, %end, "time window start is after its end; nothing will match");
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Inclusive at both ends.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        self.start <= *timestamp && *timestamp <= self.end
    }
}

fn parse_bound(
    bound: &'static str,
    input: Option<&str>,
) -> Result<Option<NaiveDateTime>, IngestError> {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    parse_timestamp(input)
        .map(Some)
        .map_err(|source| IngestError::InvalidTimeRange {
            bound,
            input: input.to_string(),
            source,
        })
}
