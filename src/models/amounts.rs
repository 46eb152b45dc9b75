//! Per-period amount mapping
//!
//! The leaf of every report section: an ordered mapping from period label to
//! a numeric total. Entries keep the order of the planned periods and
//! serialize as a JSON object in that order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::money::Money;

/// Ordered `period label -> amount` mapping
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeriodAmounts {
    entries: Vec<(String, f64)>,
}

impl PeriodAmounts {
    /// Every period present with `0.0`
    pub fn zeroed(periods: &[String]) -> Self {
        Self {
            entries: periods.iter().map(|p| (p.clone(), 0.0)).collect(),
        }
    }

    /// Pair period labels with per-slot money sums
    ///
    /// Missing slots are filled with zero.
    pub fn from_slots(periods: &[String], slots: &[Money]) -> Self {
        Self {
            entries: periods
                .iter()
                .enumerate()
                .map(|(i, p)| (p.clone(), slots.get(i).copied().unwrap_or_default().to_f64()))
                .collect(),
        }
    }

    /// Build from explicit `(label, amount)` pairs, keeping their order
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(p, v)| (p.into(), v)).collect(),
        }
    }

    /// Amount for `label`, if the period is present
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(p, _)| p == label)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(label, amount)` in period order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), *v))
    }

    /// Period labels in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }

    /// Amounts in period order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    /// Sum of all periods
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }

    /// Apply `f` to every amount
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            entries: self.entries.iter().map(|(p, v)| (p.clone(), f(*v))).collect(),
        }
    }

    /// Combine with `other` period by period, keyed on this mapping's labels
    ///
    /// A label absent from `other` contributes `0.0`.
    pub fn zip_with(&self, other: &PeriodAmounts, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(p, v)| (p.clone(), f(*v, other.get(p).unwrap_or(0.0))))
                .collect(),
        }
    }
}

impl Serialize for PeriodAmounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (period, amount) in &self.entries {
            map.serialize_entry(period, amount)?;
        }
        map.end()
    }
}
