use crate::analysis::{AnalysisError, describe};
use crate::dataset::Dataset;
use crate::ingest::Column;
use crate::test_support::sample;
use pretty_assertions::assert_eq;

#[test]
fn empty_dataset_is_an_error() {
    assert_eq!(describe(&Dataset::default()), Err(AnalysisError::EmptyDataset));
}

#[test]
fn summarises_every_numeric_column() {
    // Arrange
    let dataset: Dataset = [
        sample("2024-05-01 10:00:00", None, 40, 0, 10.0),
        sample("2024-05-01 10:01:00", None, 60, 10, 20.0),
        sample("2024-05-01 10:02:00", None, 50, 20, 30.0),
        sample("2024-05-01 10:03:00", None, 70, 30, 40.0),
    ]
    .into_iter()
    .collect();

    // Act
    let summary = describe(&dataset).unwrap();

    // Assert
    let columns: Vec<_> = summary.columns.iter().map(|c| c.column).collect();
    assert_eq!(columns, Column::ALL.to_vec());

    let signal = summary.get(Column::SignalPct).unwrap();
    assert_eq!(signal.count, 4);
    assert_eq!(signal.mean, 55.0);
    assert_eq!(signal.min, 40.0);
    assert_eq!(signal.max, 70.0);
    assert_eq!(signal.p25, 47.5);
    assert_eq!(signal.p50, 55.0);
    assert_eq!(signal.p75, 62.5);

    let std = signal.std.unwrap();
    assert!((std - 12.909_944_487_358_056).abs() < 1e-9, "std {std}");

    let rtt = summary.get(Column::RttMed).unwrap();
    assert_eq!(rtt.mean, 25.0);
    assert_eq!(rtt.p50, 25.0);
}

#[test]
fn single_sample_has_no_standard_deviation() {
    // Arrange
    let dataset: Dataset = [sample("2024-05-01 10:00:00", None, 40, 5, 10.0)]
        .into_iter()
        .collect();

    // Act
    let summary = describe(&dataset).unwrap();

    // Assert
    let loss = summary.get(Column::PacketLossPct).unwrap();
    assert_eq!(loss.std, None);
    assert_eq!(loss.p25, 5.0);
    assert_eq!(loss.p75, 5.0);
}
