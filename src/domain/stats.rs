// SPDX-License-Identifier: MPL-2.0
//! Before/after metric types for the results section.
//!
//! A metric pair only participates in layout when its after-value is
//! positive; a before/after comparison additionally requires a positive
//! before-value, otherwise the pair degrades to a single counter. Zero is
//! never shown to a visitor.

use serde::{Deserialize, Serialize};

/// An optional before/after numeric statistic (views, followers, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricPair {
    /// Display label, e.g. "Visualizzazioni" or "Followers".
    pub label: String,
    /// Value before the campaign. Absent or zero suppresses the comparison.
    pub before: Option<u64>,
    /// Value after the campaign. Absent or zero excludes the metric entirely.
    pub after: Option<u64>,
}

impl MetricPair {
    /// Creates a metric pair.
    #[must_use]
    pub fn new(label: impl Into<String>, before: Option<u64>, after: Option<u64>) -> Self {
        Self {
            label: label.into(),
            before,
            after,
        }
    }

    /// Decides how this pair renders, or `None` when it is excluded.
    ///
    /// A comparison needs both values positive; a positive after-value on
    /// its own becomes an animated counter.
    #[must_use]
    pub fn display(&self) -> Option<MetricDisplay> {
        let after = self.after.filter(|&v| v > 0)?;
        match self.before.filter(|&v| v > 0) {
            Some(before) => Some(MetricDisplay::Comparison {
                label: self.label.clone(),
                before,
                after,
            }),
            None => Some(MetricDisplay::Counter {
                label: self.label.clone(),
                value: after,
            }),
        }
    }
}

/// How a populated metric renders on the results section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetricDisplay {
    /// Before/after bar comparison.
    Comparison {
        label: String,
        before: u64,
        after: u64,
    },
    /// Single animated count-up value.
    Counter { label: String, value: u64 },
}

impl MetricDisplay {
    /// Returns the headline value (the after-value for comparisons).
    #[must_use]
    pub fn headline(&self) -> u64 {
        match self {
            MetricDisplay::Comparison { after, .. } => *after,
            MetricDisplay::Counter { value, .. } => *value,
        }
    }
}

/// Formats a value the way the site's counters do: `1.2M`, `500K`, `842`.
///
/// Thousands round to the nearest unit, so `1_500` is `2K` and `999_999`
/// is `1000K`. Non-positive values render as an em dash; the site never
/// shows `0`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_compact(value: u64) -> String {
    if value == 0 {
        return "—".to_string();
    }
    if value >= 1_000_000 {
        let millions = value as f64 / 1_000_000.0;
        return format!("{millions:.1}M");
    }
    if value >= 1_000 {
        let thousands = (value as f64 / 1_000.0).round() as u64;
        return format!("{thousands}K");
    }
    value.to_string()
}
