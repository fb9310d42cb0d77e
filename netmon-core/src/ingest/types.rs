use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

/// Timestamp layout used by the monitor, always in the host's local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Written in place of the network name when the host was not associated.
pub const NO_NETWORK: &str = "None";

/// Written in place of an RTT value the monitor could not measure.
pub const UNMEASURED: &str = "null";

//-----------------------------------------------------------------------------
// RTT fields
//-----------------------------------------------------------------------------

/// The four round-trip-time figures reported on every log line (milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rtt<T> {
    pub min: T,
    pub med: T,
    pub max: T,
    pub dev: T,
}

impl Rtt<Option<f64>> {
    /// Returns the measured values only when all four are present.
    pub fn complete(&self) -> Option<Rtt<f64>> {
        Some(Rtt {
            min: self.min?,
            med: self.med?,
            max: self.max?,
            dev: self.dev?,
        })
    }
}

//-----------------------------------------------------------------------------
// Parsed line
//-----------------------------------------------------------------------------

/// A line that matched the log grammar. RTT values may still be unmeasured.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub network: Option<String>,
    pub signal_pct: u32,
    pub packet_loss_pct: u32,
    pub rtt: Rtt<Option<f64>>,
}

impl LogRecord {
    /// A record becomes a [`Sample`] only if every RTT field was measured.
    pub fn is_complete(&self) -> bool {
        self.rtt.complete().is_some()
    }

    pub fn into_sample(self) -> Option<Sample> {
        let rtt = self.rtt.complete()?;
        Some(Sample {
            timestamp: self.timestamp,
            network: self.network,
            signal_pct: self.signal_pct,
            packet_loss_pct: self.packet_loss_pct,
            rtt,
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(
            f,
            &self.timestamp,
            self.network.as_deref(),
            self.signal_pct,
            self.packet_loss_pct,
            [self.rtt.min, self.rtt.med, self.rtt.max, self.rtt.dev],
        )
    }
}

//-----------------------------------------------------------------------------
// Retained sample
//-----------------------------------------------------------------------------

/// One complete measurement kept for analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: NaiveDateTime,
    pub network: Option<String>,
    pub signal_pct: u32,
    pub packet_loss_pct: u32,
    pub rtt: Rtt<f64>,
}

impl Sample {
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::SignalPct => f64::from(self.signal_pct),
            Column::PacketLossPct => f64::from(self.packet_loss_pct),
            Column::RttMin => self.rtt.min,
            Column::RttMed => self.rtt.med,
            Column::RttMax => self.rtt.max,
            Column::RttDev => self.rtt.dev,
        }
    }
}

impl From<Sample> for LogRecord {
    fn from(sample: Sample) -> Self {
        LogRecord {
            timestamp: sample.timestamp,
            network: sample.network,
            signal_pct: sample.signal_pct,
            packet_loss_pct: sample.packet_loss_pct,
            rtt: Rtt {
                min: Some(sample.rtt.min),
                med: Some(sample.rtt.med),
                max: Some(sample.rtt.max),
                dev: Some(sample.rtt.dev),
            },
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_line(
            f,
            &self.timestamp,
            self.network.as_deref(),
            self.signal_pct,
            self.packet_loss_pct,
            [
                Some(self.rtt.min),
                Some(self.rtt.med),
                Some(self.rtt.max),
                Some(self.rtt.dev),
            ],
        )
    }
}

// Canonical rendering of the grammar; `{}` on f64 never switches to exponent
// notation, so the output always parses back to the same values.
fn write_line(
    f: &mut fmt::Formatter<'_>,
    timestamp: &NaiveDateTime,
    network: Option<&str>,
    signal_pct: u32,
    packet_loss_pct: u32,
    rtt: [Option<f64>; 4],
) -> fmt::Result {
    write!(
        f,
        "{} - network={}  signal={}%  packet-loss={}%",
        timestamp.format(TIMESTAMP_FORMAT),
        network.unwrap_or(NO_NETWORK),
        signal_pct,
        packet_loss_pct,
    )?;

    for (name, value) in ["rtt-min", "rtt-med", "rtt-max", "rtt-dev"].iter().zip(rtt) {
        match value {
            Some(v) => write!(f, "  {name}={v} ms")?,
            None => write!(f, "  {name}={UNMEASURED} ms")?,
        }
    }

    Ok(())
}

//-----------------------------------------------------------------------------
// Numeric columns
//-----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    SignalPct,
    PacketLossPct,
    RttMin,
    RttMed,
    RttMax,
    RttDev,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::SignalPct,
        Column::PacketLossPct,
        Column::RttMin,
        Column::RttMed,
        Column::RttMax,
        Column::RttDev,
    ];

    pub const RTT: [Column; 4] = [Column::RttMin, Column::RttMed, Column::RttMax, Column::RttDev];

    pub fn name(self) -> &'static str {
        match self {
            Column::SignalPct => "signal_pct",
            Column::PacketLossPct => "packet_loss_pct",
            Column::RttMin => "rtt_min",
            Column::RttMed => "rtt_med",
            Column::RttMax => "rtt_max",
            Column::RttDev => "rtt_dev",
        }
    }

    /// Human label used by the pretty renderer.
    pub fn label(self) -> &'static str {
        match self {
            Column::SignalPct => "Signal (%)",
            Column::PacketLossPct => "Packet loss (%)",
            Column::RttMin => "RTT min (ms)",
            Column::RttMed => "RTT median (ms)",
            Column::RttMax => "RTT max (ms)",
            Column::RttDev => "RTT deviation (ms)",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
