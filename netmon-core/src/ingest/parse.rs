use crate::ingest::error::ParseError;
use crate::ingest::types::{LogRecord, NO_NETWORK, Rtt, TIMESTAMP_FORMAT, UNMEASURED};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Tokens are captured loosely so that a malformed value is reported against
// its field instead of as a generic mismatch.
static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<timestamp>\S+\s+\S+)\s+-\s+",
        r"network=(?P<network>\S+)\s+",
        r"signal=(?P<signal>\S+?)\s*%\s+",
        r"packet-loss=(?P<packet_loss>\S+?)\s*%\s+",
        r"rtt-min=(?P<rtt_min>\S+?)\s*ms\s+",
        r"rtt-med=(?P<rtt_med>\S+?)\s*ms\s+",
        r"rtt-max=(?P<rtt_max>\S+?)\s*ms\s+",
        r"rtt-dev=(?P<rtt_dev>\S+?)\s*ms\s*$",
    ))
    .expect("log line pattern is valid")
});

static TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2}$")
        .expect("timestamp pattern is valid")
});

/// Parses one line of the netmon log.
///
/// ```text
/// 2024-05-01 14:00:00 - network=HomeWifi  signal=72%  packet-loss=0%  rtt-min=11.2 ms  rtt-med=14.9 ms  rtt-max=30.1 ms  rtt-dev=3.4 ms
/// ```
///
/// A record with unmeasured RTT values (`null`) is still a successful parse;
/// dropping it is the ingestion step's decision.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let caps = LINE.captures(line).ok_or(ParseError::NoMatch)?;

    Ok(LogRecord {
        timestamp: parse_timestamp(&caps["timestamp"])?,
        network: parse_network(&caps["network"]),
        signal_pct: parse_integer(&caps, "signal")?,
        packet_loss_pct: parse_integer(&caps, "packet_loss")?,
        rtt: Rtt {
            min: parse_rtt(&caps, "rtt_min")?,
            med: parse_rtt(&caps, "rtt_med")?,
            max: parse_rtt(&caps, "rtt_max")?,
            dev: parse_rtt(&caps, "rtt_dev")?,
        },
    })
}

/// Parses the fixed `YYYY-MM-DD HH:MM:SS` layout. No timezone is applied.
///
/// Every field must be zero padded; chrono alone would accept `2024-5-1 4:0:0`.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ParseError> {
    let invalid = || ParseError::Timestamp {
        value: value.to_string(),
    };

    if !TIMESTAMP.is_match(value) {
        return Err(invalid());
    }

    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| invalid())
}

fn parse_network(token: &str) -> Option<String> {
    (token != NO_NETWORK).then(|| token.to_string())
}

fn parse_integer(caps: &Captures<'_>, field: &'static str) -> Result<u32, ParseError> {
    let token = &caps[field];
    let invalid = || ParseError::Integer {
        field,
        value: token.to_string(),
    };

    // Digits only: `u32::from_str` would also take a leading `+`.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    token.parse().map_err(|_| invalid())
}

fn parse_rtt(caps: &Captures<'_>, field: &'static str) -> Result<Option<f64>, ParseError> {
    let token = &caps[field];
    if token == UNMEASURED {
        return Ok(None);
    }

    // Plain non-negative decimals only: no sign, exponent, inf or NaN.
    let plain = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.');

    // A long enough digit string still overflows to infinity.
    match token.parse::<f64>() {
        Ok(value) if plain && value.is_finite() => Ok(Some(value)),
        _ => Err(ParseError::Rtt {
            field,
            value: token.to_string(),
        }),
    }
}
