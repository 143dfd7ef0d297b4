//! Grouped aggregation over a single key column.
//!
//! Every dashboard chart reduces the table to `[key, value]` pairs: one
//! categorical key (year, month, vehicle type) and one aggregated measure.

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregation applied to the value column within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AggFn {
    /// Arithmetic mean, nulls skipped
    Mean,
    /// Sum, nulls skipped
    Sum,
}

impl AggFn {
    fn apply(self, expr: Expr) -> Expr {
        match self {
            Self::Mean => expr.mean(),
            Self::Sum => expr.sum(),
        }
    }

    /// Short lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
        }
    }
}

/// Row order of the aggregated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupOrder {
    /// Ascending by group key
    Key,
    /// Groups in the order their key first appears in the input
    FirstSeen,
    /// First-seen groups, then stably sorted by aggregated value, largest
    /// first and missing values last
    ValueDescending,
}

/// A single `group_by(key).agg(func(value))` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupedAggregate {
    /// Column to group on
    pub key: &'static str,
    /// Column to aggregate
    pub value: &'static str,
    /// Aggregation function
    pub func: AggFn,
    /// Result ordering
    pub order: GroupOrder,
}

impl GroupedAggregate {
    /// Mean of `value` per `key`, ordered by key.
    pub const fn mean(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value,
            func: AggFn::Mean,
            order: GroupOrder::Key,
        }
    }

    /// Sum of `value` per `key`, ordered by key.
    pub const fn sum(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value,
            func: AggFn::Sum,
            order: GroupOrder::Key,
        }
    }

    /// Same aggregation with a different result order.
    pub const fn ordered(mut self, order: GroupOrder) -> Self {
        self.order = order;
        self
    }

    /// Build the aggregation lazily.
    ///
    /// Rows with a null key are dropped. Returns a LazyFrame with columns:
    /// [key, value]
    pub fn compute(&self, data: LazyFrame) -> LazyFrame {
        let data = data.filter(col(self.key).is_not_null());
        let measure = self
            .func
            .apply(col(self.value).cast(DataType::Float64))
            .alias(self.value);

        let grouped = match self.order {
            GroupOrder::Key => data
                .group_by([col(self.key)])
                .agg([measure])
                .sort([self.key], SortMultipleOptions::default()),
            GroupOrder::FirstSeen => data.group_by_stable([col(self.key)]).agg([measure]),
            GroupOrder::ValueDescending => data
                .group_by_stable([col(self.key)])
                .agg([measure])
                .sort(
                    [self.value],
                    SortMultipleOptions::default()
                        .with_order_descending(true)
                        .with_nulls_last(true)
                        .with_maintain_order(true),
                ),
        };

        grouped.select([col(self.key), col(self.value)])
    }

    /// Run the aggregation and collect it into a [`GroupedSeries`].
    pub fn apply(&self, name: &str, data: LazyFrame) -> Result<GroupedSeries> {
        let frame = self.compute(data).collect()?;
        GroupedSeries::from_frame(name, &frame, self.key, self.value)
    }
}

/// Aggregated `[key, value]` pairs ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupedSeries {
    /// Statistic name this series was produced for
    pub name: String,
    /// Name of the key column
    pub key_column: String,
    /// Name of the value column
    pub value_column: String,
    /// Group keys rendered as text
    pub labels: Vec<String>,
    /// Aggregated values, aligned with `labels`
    pub values: Vec<f64>,
}

impl GroupedSeries {
    /// Extract a series from a two-column aggregated frame.
    ///
    /// Null aggregates (groups without any value) become `NaN`.
    pub fn from_frame(name: &str, frame: &DataFrame, key: &str, value: &str) -> Result<Self> {
        let keys = frame.column(key)?.cast(&DataType::String)?;
        let labels = keys
            .str()?
            .into_iter()
            .map(|label| label.unwrap_or_default().to_string())
            .collect();

        let measures = frame.column(value)?.cast(&DataType::Float64)?;
        let values = measures
            .f64()?
            .into_iter()
            .map(|v| v.unwrap_or(f64::NAN))
            .collect();

        Ok(Self {
            name: name.to_string(),
            key_column: key.to_string(),
            value_column: value.to_string(),
            labels,
            values,
        })
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no groups.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Value for a group key.
    pub fn value_of(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.values[i])
    }

    /// Iterate over `(label, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}
