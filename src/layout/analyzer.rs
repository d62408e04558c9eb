//! Layout analyzer: items -> rows.
//!
//! Items arrive in document order. A flow or grid layout places items on
//! the same visual row at the same top offset, so a change in (rounded)
//! top offset marks the start of a new row.

use crate::model::geometry::{parse_css_float, round2, ItemRect, Px};
use serde::{Deserialize, Serialize};

/// Sentinel the host reports for an unset `gap`.
pub const GAP_NORMAL: &str = "normal";

/// Resolved gap properties of the item container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapStyle {
    /// Resolved `gap` shorthand, e.g. `"10px"`, `"10px 20px"` or `"normal"`.
    pub gap: String,
    /// Resolved `row-gap` longhand.
    pub row_gap: String,
}

impl Default for GapStyle {
    fn default() -> Self {
        Self {
            gap: GAP_NORMAL.to_string(),
            row_gap: GAP_NORMAL.to_string(),
        }
    }
}

impl GapStyle {
    /// Create a gap style from the two resolved values.
    pub fn new(gap: impl Into<String>, row_gap: impl Into<String>) -> Self {
        Self {
            gap: gap.into(),
            row_gap: row_gap.into(),
        }
    }

    /// Vertical gap between rows in pixels.
    ///
    /// The shorthand wins when it parses. When it is `normal` (or blank,
    /// or otherwise unparsable) the `row-gap` longhand is used, and when
    /// neither parses the gap is 0.
    pub fn resolve(&self) -> Px {
        let shorthand = self.gap.trim();
        if !shorthand.is_empty() && shorthand != GAP_NORMAL {
            if let Some(gap) = parse_css_float(shorthand) {
                return gap;
            }
        }
        parse_css_float(&self.row_gap).unwrap_or(0.0)
    }
}

/// A horizontal band of items sharing the same top offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Top offset shared by the row's items, rounded to hundredths.
    pub top: Px,
    /// Items in document order.
    pub items: Vec<ItemRect>,
}

impl Row {
    /// Height of the tallest item, rounded to hundredths. Empty rows are 0.
    pub fn height(&self) -> Px {
        let tallest = self
            .items
            .iter()
            .fold(0.0_f64, |max, item| max.max(item.height));
        round2(tallest)
    }
}

/// Result of one measurement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// Rows in visual order.
    pub rows: Vec<Row>,
    /// Resolved inter-row gap. Reported even when there is a single row.
    pub gap: Px,
}

impl RowLayout {
    /// Per-row heights, in row order.
    pub fn row_heights(&self) -> Vec<Px> {
        self.rows.iter().map(Row::height).collect()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows were found.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Group items into rows by their rounded top offset.
///
/// Rows are contiguous runs: an item only joins the row of the item
/// immediately before it. An item that wraps back to a previously seen top
/// offset after a different one starts a fresh row.
pub fn group_rows(items: &[ItemRect]) -> Vec<Row> {
    let mut rows: Vec<Row> = Vec::new();
    let mut current_key: Option<i64> = None;
    let mut current: Vec<ItemRect> = Vec::new();

    for item in items {
        let key = item.row_key();
        if current_key == Some(key) {
            current.push(*item);
            continue;
        }

        if let Some(prev_key) = current_key.replace(key) {
            rows.push(Row {
                top: prev_key as Px / 100.0,
                items: std::mem::take(&mut current),
            });
        }
        current.push(*item);
    }

    if let Some(key) = current_key {
        rows.push(Row {
            top: key as Px / 100.0,
            items: current,
        });
    }

    rows
}

/// Run a full measurement pass.
pub fn analyze(items: &[ItemRect], gap: &GapStyle) -> RowLayout {
    RowLayout {
        rows: group_rows(items),
        gap: gap.resolve(),
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
