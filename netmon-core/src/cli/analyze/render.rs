use crate::analysis::{
    Correlation, HourlyMeans, Output, PeakHours, RecoveryReport, Report, RttCorrelations, Summary,
};
use crate::ingest::types::{Column, Sample};
use owo_colors::OwoColorize;

pub fn render_report(report: &Report, color: bool) -> String {
    let mut out = String::new();

    for partition in &report.partitions {
        let title = format!("{} ({} samples)", partition.label, partition.samples);
        if color {
            out.push_str(&format!("{}\n", title.bold()));
        } else {
            out.push_str(&format!("{title}\n"));
        }

        match &partition.result {
            Ok(output) => out.push_str(&render_output(output)),
            Err(err) if color => out.push_str(&format!("  {}: {}\n", "error".red().bold(), err)),
            Err(err) => out.push_str(&format!("  error: {err}\n")),
        }
        out.push('\n');
    }

    out
}

fn render_output(output: &Output) -> String {
    match output {
        Output::Samples(samples) => render_samples(samples),
        Output::Summary(summary) => render_summary(summary),
        Output::Correlations(correlations) => render_correlations(correlations),
        Output::Hourly(hourly) => render_hourly(hourly),
        Output::Peaks(peaks) => render_peaks(peaks),
        Output::Recovery(report) => render_recovery(report),
    }
}

fn render_samples(samples: &[Sample]) -> String {
    samples.iter().map(|s| format!("  {s}\n")).collect()
}

fn render_summary(summary: &Summary) -> String {
    let mut out = format!(
        "  {:<16} {:>7} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}\n",
        "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );

    for c in &summary.columns {
        let std = c
            .std
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!(
            "  {:<16} {:>7} {:>10.2} {:>10} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}\n",
            c.column.name(),
            c.count,
            c.mean,
            std,
            c.min,
            c.p25,
            c.p50,
            c.p75,
            c.max
        ));
    }

    out
}

fn render_correlations(correlations: &RttCorrelations) -> String {
    let mut out = String::from("  Signal vs RTT (Pearson):\n");

    for (column, correlation) in correlations {
        let line = match (correlation, correlation.classify()) {
            (Correlation::Defined(r), Some(class)) => format!("{r:.4} ({class} correlation)"),
            _ => "undefined (a series has no variance)".to_string(),
        };
        out.push_str(&format!("    {:<20} {}\n", column.label(), line));
    }

    out
}

fn render_hourly(hourly: &HourlyMeans) -> String {
    let mut out = format!("  Mean {} per hour of day:\n", Column::RttMed.label());
    for (hour, mean) in hourly {
        out.push_str(&format!("    {hour:02}:00  {mean:>10.2} ms\n"));
    }
    out
}

fn render_peaks(peaks: &PeakHours) -> String {
    let mut out = format!(
        "  Highest mean RTT around {}:00\n  Highest packet loss around {}:00\n",
        peaks.worst_rtt_hour, peaks.worst_packet_loss_hour
    );

    if peaks.coincide {
        out.push_str(&format!(
            "  Greatest instability around {}:00. Consider avoiding this period for critical work.\n",
            peaks.worst_rtt_hour
        ));
    } else {
        out.push_str("  Instability varies during the day; use the hours above to plan network use.\n");
    }

    out
}

fn render_recovery(report: &RecoveryReport) -> String {
    match report {
        RecoveryReport::NoEvents => {
            "  No failure followed by a recovery in the analysed interval.\n".to_string()
        }
        RecoveryReport::Observed { events, mean_secs } => format!(
            "  Mean recovery time after failure: {mean_secs:.2} seconds ({} events)\n",
            events.len()
        ),
    }
}
