use crate::analysis::describe::mean;
use crate::analysis::error::AnalysisError;
use crate::dataset::Dataset;
use crate::ingest::types::Column;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Pearson coefficient, or `Undefined` when either series has no variance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Correlation {
    Defined(f64),
    Undefined,
}

impl Correlation {
    pub fn coefficient(&self) -> Option<f64> {
        match self {
            Correlation::Defined(r) => Some(*r),
            Correlation::Undefined => None,
        }
    }

    pub fn classify(&self) -> Option<Classification> {
        self.coefficient().map(Classification::of)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    VeryStrong,
    Moderate,
    Weak,
    VeryWeak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub direction: Direction,
    pub strength: Strength,
}

impl Classification {
    pub fn of(r: f64) -> Self {
        let direction = if r > 0.0 {
            Direction::Positive
        } else {
            Direction::Negative
        };

        let strength = match r.abs() {
            a if a >= 0.7 => Strength::VeryStrong,
            a if a >= 0.5 => Strength::Moderate,
            a if a >= 0.3 => Strength::Weak,
            _ => Strength::VeryWeak,
        };

        Self {
            direction,
            strength,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Positive => "positive",
            Direction::Negative => "negative",
        })
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::VeryStrong => "very strong",
            Strength::Moderate => "moderate",
            Strength::Weak => "weak",
            Strength::VeryWeak => "very weak",
        })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.strength)
    }
}

pub type RttCorrelations = BTreeMap<Column, Correlation>;

/// Correlates signal strength against each RTT column of the same partition.
pub fn correlate_signal_vs_rtt(dataset: &Dataset) -> Result<RttCorrelations, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let signal = dataset.column(Column::SignalPct);

    Ok(Column::RTT
        .iter()
        .map(|&column| (column, pearson(&signal, &dataset.column(column))))
        .collect())
}

pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    debug_assert_eq!(xs.len(), ys.len());

    if xs.len() < 2 || is_constant(xs) || is_constant(ys) {
        return Correlation::Undefined;
    }

    let mx = mean(xs);
    let my = mean(ys);

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mx;
        let dy = y - my;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Correlation::Undefined;
    }

    Correlation::Defined((sxy / denom).clamp(-1.0, 1.0))
}

// Exact comparison: a mean-based variance can come out as a tiny non-zero
// value for identical inputs.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
