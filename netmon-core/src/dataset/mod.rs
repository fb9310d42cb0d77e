//! Immutable, chronologically ordered collections of samples.
//!
//! A [`Dataset`] is built once per extraction and never modified afterwards.
//! Filtering and partitioning produce new datasets; nothing derived (such as
//! the hour of day) is ever stored back onto the samples.

mod partition;
mod window;

pub use partition::{NO_NETWORK_LABEL, OVERALL, PartitionMode, Partitions, network_label, partition};
pub use window::TimeWindow;

use crate::ingest::types::{Column, Sample};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Samples must already be in log (chronological) order; they are not re-sorted.
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn column(&self, column: Column) -> Vec<f64> {
        self.samples.iter().map(|s| s.value(column)).collect()
    }

    pub fn filter_window(&self, window: &TimeWindow) -> Dataset {
        self.samples
            .iter()
            .filter(|s| window.contains(&s.timestamp))
            .cloned()
            .collect()
    }

    pub fn partition(&self, mode: PartitionMode) -> Partitions {
        partition(self, mode)
    }
}

impl FromIterator<Sample> for Dataset {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
