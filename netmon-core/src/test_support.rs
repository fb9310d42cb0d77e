use crate::dataset::Dataset;
use crate::ingest::{Rtt, Sample, parse_timestamp};
use chrono::NaiveDateTime;

pub fn ts(value: &str) -> NaiveDateTime {
    parse_timestamp(value).unwrap()
}

/// Sample with every RTT column derived from `rtt_med`.
pub fn sample(at: &str, network: Option<&str>, signal: u32, loss: u32, rtt_med: f64) -> Sample {
    Sample {
        timestamp: ts(at),
        network: network.map(str::to_string),
        signal_pct: signal,
        packet_loss_pct: loss,
        rtt: Rtt {
            min: rtt_med * 0.5,
            med: rtt_med,
            max: rtt_med * 2.0,
            dev: rtt_med * 0.1,
        },
    }
}

/// Samples one minute apart starting at 10:00:00, with the given packet losses.
pub fn loss_series(losses: &[u32]) -> Dataset {
    losses
        .iter()
        .enumerate()
        .map(|(i, &loss)| sample(&format!("2024-05-01 10:{i:02}:00"), Some("home"), 60, loss, 20.0))
        .collect()
}
