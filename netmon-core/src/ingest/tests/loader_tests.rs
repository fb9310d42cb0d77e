use super::{UNMEASURED, VALID};
use crate::dataset::TimeWindow;
use crate::ingest::{IngestError, IngestStats, extract, extract_file, extract_from_reader};
use crate::test_support::ts;
use pretty_assertions::assert_eq;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

fn everything() -> TimeWindow {
    TimeWindow::new(ts("2000-01-01 00:00:00"), ts("2100-01-01 00:00:00"))
}

#[test]
fn malformed_lines_are_skipped() {
    // Arrange
    let log = format!("{VALID}\nthis line is not a measurement\n");

    // Act
    let extraction = extract_from_reader(Cursor::new(log), &everything()).unwrap();

    // Assert
    assert_eq!(extraction.dataset.len(), 1);
    assert_eq!(
        extraction.stats,
        IngestStats {
            lines: 2,
            rejected: 1,
            outside_window: 0,
            incomplete: 0,
            retained: 1,
        }
    );
}

#[test]
fn incomplete_records_are_dropped_after_parsing() {
    // Arrange
    let log = format!("{VALID}\n{UNMEASURED}\n");

    // Act
    let extraction = extract_from_reader(Cursor::new(log), &everything()).unwrap();

    // Assert
    assert_eq!(extraction.dataset.len(), 1);
    assert_eq!(extraction.stats.incomplete, 1);
    assert_eq!(extraction.stats.rejected, 0);
}

#[test]
fn invalid_utf8_line_is_rejected_without_aborting() {
    // Arrange
    let mut log = b"\xff\xfe broken\n".to_vec();
    log.extend_from_slice(VALID.as_bytes());

    // Act
    let extraction = extract_from_reader(Cursor::new(log), &everything()).unwrap();

    // Assert
    assert_eq!(extraction.stats.rejected, 1);
    assert_eq!(extraction.stats.retained, 1);
}

#[test]
fn window_bounds_are_inclusive() {
    // Arrange
    let log = [
        VALID.replace("14:00:00", "13:59:59"),
        VALID.to_string(),
        VALID.replace("14:00:00", "15:00:00"),
        VALID.replace("14:00:00", "15:00:01"),
    ]
    .join("\n");
    let window = TimeWindow::new(ts("2024-05-01 14:00:00"), ts("2024-05-01 15:00:00"));

    // Act
    let extraction = extract_from_reader(Cursor::new(log), &window).unwrap();

    // Assert
    let kept: Vec<_> = extraction.dataset.iter().map(|s| s.timestamp).collect();
    assert_eq!(kept, vec![ts("2024-05-01 14:00:00"), ts("2024-05-01 15:00:00")]);
    assert_eq!(extraction.stats.outside_window, 2);
}

#[test]
fn samples_keep_log_order() {
    // Arrange
    let log = [
        VALID.replace("14:00:00", "14:05:00"),
        VALID.replace("14:00:00", "14:01:00"),
    ]
    .join("\n");

    // Act
    let extraction = extract_from_reader(Cursor::new(log), &everything()).unwrap();

    // Assert
    let kept: Vec<_> = extraction.dataset.iter().map(|s| s.timestamp).collect();
    assert_eq!(kept, vec![ts("2024-05-01 14:05:00"), ts("2024-05-01 14:01:00")]);
}

#[test]
fn extract_file_reads_from_disk() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("netmon.log");
    fs::write(&path, format!("{VALID}\n{UNMEASURED}\n")).unwrap();

    // Act
    let extraction = extract_file(&path, &everything()).unwrap();

    // Assert
    assert_eq!(extraction.stats.lines, 2);
    assert_eq!(extraction.dataset.len(), 1);
}

#[test]
fn missing_file_is_source_unavailable() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.log");

    // Act
    let err = extract_file(&path, &everything()).unwrap_err();

    // Assert
    assert!(matches!(err, IngestError::SourceUnavailable { path: p, .. } if p == path));
}

#[test]
fn invalid_bound_fails_before_the_file_is_opened() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.log");

    // Act
    let err = extract(&path, Some("yesterday"), None).unwrap_err();

    // Assert
    assert!(matches!(
        err,
        IngestError::InvalidTimeRange { bound: "start", .. }
    ));
}
