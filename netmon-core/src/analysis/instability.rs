use crate::analysis::error::AnalysisError;
use crate::analysis::hourly::{HourlyMeans, hourly_mean};
use crate::dataset::Dataset;
use crate::ingest::types::Column;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeakHours {
    pub worst_rtt_hour: u32,
    pub worst_packet_loss_hour: u32,
    /// Both peaks fall in the same hour.
    pub coincide: bool,
}

/// Hours with the highest mean median-RTT and the highest mean packet loss.
pub fn peak_hours(dataset: &Dataset) -> Result<PeakHours, AnalysisError> {
    let rtt = hourly_mean(dataset, Column::RttMed)?;
    let loss = hourly_mean(dataset, Column::PacketLossPct)?;

    let worst_rtt_hour = argmax(&rtt).ok_or(AnalysisError::EmptyDataset)?;
    let worst_packet_loss_hour = argmax(&loss).ok_or(AnalysisError::EmptyDataset)?;

    Ok(PeakHours {
        worst_rtt_hour,
        worst_packet_loss_hour,
        coincide: worst_rtt_hour == worst_packet_loss_hour,
    })
}

/// Earliest hour holding the maximum; later ties never replace it.
fn argmax(means: &HourlyMeans) -> Option<u32> {
    let mut best: Option<(u32, f64)> = None;
    for (&hour, &value) in means {
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((hour, value)),
        }
    }
    best.map(|(hour, _)| hour)
}
