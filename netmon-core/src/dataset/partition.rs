use crate::dataset::Dataset;
use crate::ingest::types::Sample;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label of the single partition produced in aggregate mode.
pub const OVERALL: &str = "overall";

/// Label of the per-network partition holding samples taken while unassociated.
pub const NO_NETWORK_LABEL: &str = "(no network)";

/// Ordered `label -> Dataset` mapping consumed by every analytic stage.
pub type Partitions = BTreeMap<String, Dataset>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PartitionMode {
    /// Analyse all networks together
    #[default]
    Aggregate,

    /// Analyse each network separately
    PerNetwork,
}

pub fn partition(dataset: &Dataset, mode: PartitionMode) -> Partitions {
    match mode {
        PartitionMode::Aggregate => Partitions::from([(OVERALL.to_string(), dataset.clone())]),
        PartitionMode::PerNetwork => {
            let mut groups: BTreeMap<String, Vec<Sample>> = BTreeMap::new();
            for sample in dataset.iter() {
                groups
                    .entry(network_label(sample.network.as_deref()))
                    .or_default()
                    .push(sample.clone());
            }

            groups
                .into_iter()
                .map(|(label, samples)| (label, Dataset::new(samples)))
                .collect()
        }
    }
}

pub fn network_label(network: Option<&str>) -> String {
    network.unwrap_or(NO_NETWORK_LABEL).to_string()
}
