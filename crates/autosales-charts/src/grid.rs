//! The dashboard's fixed chart grid: two rows of two charts.

use crate::figure::Figure;
use serde::{Deserialize, Serialize};

/// CSS class of a grid row.
pub const ROW_CLASS: &str = "chart-row";

/// CSS class of a grid cell.
pub const ITEM_CLASS: &str = "chart-item";

/// A chart placed in the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartItem {
    /// Identifier of the statistic drawn
    pub id: String,
    /// CSS class of the cell
    pub class_name: String,
    /// Figure to draw
    pub figure: Figure,
}

impl ChartItem {
    /// Create a grid cell.
    pub fn new(id: impl Into<String>, figure: Figure) -> Self {
        Self {
            id: id.into(),
            class_name: ITEM_CLASS.to_string(),
            figure,
        }
    }
}

/// One row of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// CSS class of the row
    pub class_name: String,
    /// Cells, left to right
    pub items: Vec<ChartItem>,
}

impl ChartRow {
    /// Create a row.
    pub fn new(items: Vec<ChartItem>) -> Self {
        Self {
            class_name: ROW_CLASS.to_string(),
            items,
        }
    }
}

/// Contents of the output container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartGrid {
    /// Rows, top to bottom
    pub rows: Vec<ChartRow>,
}

impl ChartGrid {
    /// Build the two-row, two-column grid.
    pub fn two_by_two(top: [ChartItem; 2], bottom: [ChartItem; 2]) -> Self {
        Self {
            rows: vec![ChartRow::new(top.into()), ChartRow::new(bottom.into())],
        }
    }

    /// An empty grid (nothing to show).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the grid has no charts.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.items.is_empty())
    }

    /// Every cell, row by row.
    pub fn items(&self) -> impl Iterator<Item = &ChartItem> {
        self.rows.iter().flat_map(|row| row.items.iter())
    }

    /// Cell ids, row by row.
    pub fn ids(&self) -> Vec<&str> {
        self.items().map(|item| item.id.as_str()).collect()
    }

    /// Find a cell by id.
    pub fn find(&self, id: &str) -> Option<&ChartItem> {
        self.items().find(|item| item.id == id)
    }
}
