use super::{UNMEASURED, VALID};
use crate::ingest::{LogRecord, ParseError, Rtt, parse_line, parse_timestamp};
use pretty_assertions::assert_eq;

#[test]
fn parses_a_complete_line() {
    // Act
    let record = parse_line(VALID).unwrap();

    // Assert
    assert_eq!(record.timestamp, parse_timestamp("2024-05-01 14:00:00").unwrap());
    assert_eq!(record.network.as_deref(), Some("HomeWifi"));
    assert_eq!(record.signal_pct, 72);
    assert_eq!(record.packet_loss_pct, 3);
    assert_eq!(
        record.rtt,
        Rtt {
            min: Some(11.2),
            med: Some(14.9),
            max: Some(30.1),
            dev: Some(3.4),
        }
    );
    assert!(record.is_complete());
}

#[test]
fn none_network_and_null_rtt_are_sentinels() {
    // Act
    let record = parse_line(UNMEASURED).unwrap();

    // Assert
    assert_eq!(record.network, None);
    assert_eq!(record.packet_loss_pct, 100);
    assert_eq!(
        record.rtt,
        Rtt {
            min: None,
            med: None,
            max: None,
            dev: None,
        }
    );
    assert!(!record.is_complete());
    assert_eq!(record.into_sample(), None);
}

#[test]
fn a_single_null_rtt_makes_the_record_incomplete() {
    // Arrange
    let line = VALID.replace("rtt-dev=3.4 ms", "rtt-dev=null ms");

    // Act
    let record = parse_line(&line).unwrap();

    // Assert
    assert_eq!(record.rtt.dev, None);
    assert_eq!(record.rtt.med, Some(14.9));
    assert!(!record.is_complete());
}

#[test]
fn tolerates_varying_whitespace_between_fields() {
    // Arrange
    let line = "2024-05-01 14:00:00 -  network=Office signal=50 %   packet-loss=0%  rtt-min=1 ms rtt-med=2ms  rtt-max=3 ms  rtt-dev=0.5 ms  ";

    // Act
    let record = parse_line(line).unwrap();

    // Assert
    assert_eq!(record.network.as_deref(), Some("Office"));
    assert_eq!(record.signal_pct, 50);
    assert_eq!(record.rtt.med, Some(2.0));
}

#[test]
fn garbage_is_rejected_as_no_match() {
    assert_eq!(parse_line("garbage text"), Err(ParseError::NoMatch));
    assert_eq!(parse_line(""), Err(ParseError::NoMatch));
}

#[test]
fn missing_field_is_rejected() {
    // Arrange
    let line = VALID.replace("  rtt-dev=3.4 ms", "");

    // Act & Assert
    assert_eq!(parse_line(&line), Err(ParseError::NoMatch));
}

#[test]
fn invalid_timestamp_is_reported() {
    // Arrange
    let line = VALID.replace("2024-05-01 14:00:00", "2024-13-01 14:00:00");

    // Act & Assert
    assert_eq!(
        parse_line(&line),
        Err(ParseError::Timestamp {
            value: "2024-13-01 14:00:00".to_string()
        })
    );
}

#[test]
fn unpadded_timestamp_is_reported() {
    for stamp in ["2024-5-1 4:0:0", "2024-05-01 4:00:00", "24-05-01 14:00:00"] {
        // Arrange
        let line = VALID.replace("2024-05-01 14:00:00", stamp);

        // Act & Assert
        assert_eq!(
            parse_line(&line),
            Err(ParseError::Timestamp {
                value: stamp.to_string()
            }),
            "timestamp {stamp}"
        );
    }
}

#[test]
fn parse_timestamp_requires_the_fixed_layout() {
    assert!(parse_timestamp("2024-05-01 04:00:00").is_ok());
    assert!(parse_timestamp("2024-5-1 4:0:0").is_err());
    assert!(parse_timestamp("2024-05-01T04:00:00").is_err());
    assert!(parse_timestamp(" 2024-05-01 04:00:00").is_err());
}

#[test]
fn non_integer_percentage_is_reported() {
    for (field, original, token) in [
        ("signal", "signal=72%", "7.2"),
        ("signal", "signal=72%", "+72"),
        ("signal", "signal=72%", "-1"),
        ("packet_loss", "packet-loss=3%", "+3"),
        ("packet_loss", "packet-loss=3%", "99999999999"),
    ] {
        // Arrange
        let name = original.split('=').next().unwrap();
        let line = VALID.replace(original, &format!("{name}={token}%"));

        // Act & Assert
        assert_eq!(
            parse_line(&line),
            Err(ParseError::Integer {
                field,
                value: token.to_string()
            }),
            "token {token}"
        );
    }
}

#[test]
fn signed_or_exponent_rtt_is_reported() {
    for token in ["-1.0", "1e3", "NaN", "inf", "1.2.3"] {
        // Arrange
        let line = VALID.replace("rtt-max=30.1 ms", &format!("rtt-max={token} ms"));

        // Act & Assert
        assert_eq!(
            parse_line(&line),
            Err(ParseError::Rtt {
                field: "rtt_max",
                value: token.to_string()
            }),
            "token {token}"
        );
    }
}

#[test]
fn rtt_overflowing_to_infinity_is_reported() {
    // Arrange
    let digits = "1".repeat(400);
    let line = VALID.replace("rtt-min=11.2 ms", &format!("rtt-min={digits} ms"));

    // Act & Assert
    assert_eq!(
        parse_line(&line),
        Err(ParseError::Rtt {
            field: "rtt_min",
            value: digits
        })
    );
}

#[test]
fn integer_rtt_is_accepted() {
    // Arrange
    let line = VALID.replace("rtt-min=11.2 ms", "rtt-min=11 ms");

    // Act
    let record = parse_line(&line).unwrap();

    // Assert
    assert_eq!(record.rtt.min, Some(11.0));
}

#[test]
fn display_renders_a_line_that_parses_back() {
    // Arrange
    let complete = parse_line(VALID).unwrap();
    let sample = complete.clone().into_sample().unwrap();
    let unmeasured = parse_line(UNMEASURED).unwrap();

    // Act
    let from_sample = parse_line(&sample.to_string()).unwrap();
    let from_record = parse_line(&unmeasured.to_string()).unwrap();

    // Assert
    assert_eq!(from_sample, complete);
    assert_eq!(from_record, unmeasured);
    assert!(unmeasured.to_string().contains("network=None"));
}

fn record(network: Option<&str>, signal: u32, loss: u32, rtt: [Option<f64>; 4]) -> LogRecord {
    LogRecord {
        timestamp: parse_timestamp("2024-12-31 23:59:59").unwrap(),
        network: network.map(str::to_string),
        signal_pct: signal,
        packet_loss_pct: loss,
        rtt: Rtt {
            min: rtt[0],
            med: rtt[1],
            max: rtt[2],
            dev: rtt[3],
        },
    }
}

#[test]
fn extreme_values_survive_a_round_trip() {
    let cases = [
        record(Some("HomeWifi"), 0, 0, [Some(0.0); 4]),
        record(Some("HomeWifi"), 100, 100, [Some(25.0), Some(50.0), Some(75.0), Some(100.0)]),
        record(None, 42, 7, [Some(0.000001), Some(1e-300), Some(f64::MIN_POSITIVE), Some(0.1)]),
        record(Some("x"), u32::MAX, 0, [Some(1e300), Some(f64::MAX), Some(123456789.125), Some(1.5)]),
        record(None, 0, 100, [None, Some(14.9), None, Some(3.4)]),
        record(Some("Cafe_5G"), 55, 20, [Some(11.0), None, None, None]),
    ];

    for original in cases {
        // Act
        let text = original.to_string();
        let reparsed = parse_line(&text);

        // Assert
        assert_eq!(reparsed.as_ref(), Ok(&original), "line {text}");
        assert_eq!(reparsed.unwrap().to_string(), text);
    }
}
