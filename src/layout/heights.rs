//! Height calculator: rows -> collapsed/expanded targets.

use super::analyzer::RowLayout;
use crate::model::geometry::{round2, Px};
use crate::model::RowLimit;
use serde::Serialize;

/// The two scalar targets derived from one measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TargetHeights {
    /// Height of the first `limit` rows, gaps included.
    pub collapsed: Px,
    /// Height of all rows, gaps included.
    pub expanded: Px,
}

impl TargetHeights {
    /// Whether expanding would reveal anything.
    ///
    /// Drives the toggle affordance: with nothing hidden below the limit
    /// there is nothing to expand.
    pub fn has_overflow(&self) -> bool {
        self.expanded > self.collapsed
    }
}

/// Sum row heights into collapsed and expanded targets.
///
/// Row `i` contributes `row_heights[i]`, plus `gap` for every row after
/// the first. Every row counts toward the expanded height; only rows with
/// `i < limit` count toward the collapsed height. When the limit covers
/// every row the two targets are equal.
pub fn calculate_heights(row_heights: &[Px], gap: Px, limit: RowLimit) -> TargetHeights {
    let mut collapsed = 0.0;
    let mut expanded = 0.0;

    for (i, height) in row_heights.iter().enumerate() {
        let contribution = height + if i > 0 { gap } else { 0.0 };
        if i < limit.get() {
            collapsed += contribution;
        }
        expanded += contribution;
    }

    TargetHeights {
        collapsed: round2(collapsed),
        expanded: round2(expanded),
    }
}

impl RowLayout {
    /// Reduce this layout into target heights for `limit`.
    pub fn target_heights(&self, limit: RowLimit) -> TargetHeights {
        calculate_heights(&self.row_heights(), self.gap, limit)
    }
}

#[cfg(test)]
#[path = "heights_tests.rs"]
mod tests;
