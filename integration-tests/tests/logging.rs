use integration_tests::harness::{LogFixture, capture_events, measured, unmeasured};
use pretty_assertions::assert_eq;
use tracing::Level;

#[test]
fn extraction_emits_a_summary_event() {
    // Arrange
    let log = LogFixture::new([
        measured("2024-05-01 08:00:00", Some("home"), 70, 0, 10.0),
        "garbage text".to_string(),
        unmeasured("2024-05-01 08:01:00", None),
    ]);

    // Act
    let (extraction, events) = capture_events(|| log.extract_all());

    // Assert
    assert_eq!(extraction.dataset.len(), 1);

    let summary = events
        .iter()
        .find(|e| e.message() == Some("log extraction complete"))
        .expect("summary event");

    assert_eq!(summary.level, Level::INFO);
    assert_eq!(summary.field("lines"), Some("3"));
    assert_eq!(summary.field("rejected"), Some("1"));
    assert_eq!(summary.field("incomplete"), Some("1"));
    assert_eq!(summary.field("retained"), Some("1"));
}

#[test]
fn rejected_lines_are_logged_at_debug_with_their_line_number() {
    // Arrange
    let log = LogFixture::new([
        measured("2024-05-01 08:00:00", Some("home"), 70, 0, 10.0),
        "garbage text".to_string(),
    ]);

    // Act
    let (_, events) = capture_events(|| log.extract_all());

    // Assert
    let rejected: Vec<_> = events
        .iter()
        .filter(|e| e.message() == Some("rejected log line"))
        .collect();

    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].level, Level::DEBUG);
    assert_eq!(rejected[0].field("line"), Some("2"));
    assert!(rejected[0].target.starts_with("netmon_core::ingest"));
}
