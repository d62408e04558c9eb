//! Property-based tests for row grouping and target heights.
//!
//! Tests validate:
//! 1. Grouping keeps every item and splits only where the top offset changes
//! 2. Targets follow sum(row heights) + gap * (rows - 1)
//! 3. Collapsed never exceeds expanded, and they agree once the limit covers every row
//! 4. Two toggles return the panel to its starting styles

use proptest::prelude::*;
use rowfold::config::TogglerOptions;
use rowfold::host::StyleProperty;
use rowfold::layout::{analyze, calculate_heights, group_rows, GapStyle};
use rowfold::model::{ItemRect, RowLimit};
use rowfold::sim::SimulatedPanel;
use rowfold::toggler::HeightToggler;

/// Rows as (item count, row height), laid out top to bottom with `gap`.
fn lay_out(rows: &[(usize, u32)], gap: u32) -> Vec<ItemRect> {
    let mut items = Vec::new();
    let mut top = 0.0;
    for &(count, height) in rows {
        for i in 0..count {
            // Shorter siblings never raise the row height.
            let item_height = if i == 0 { height } else { height / 2 };
            items.push(ItemRect::new(top, f64::from(item_height)));
        }
        top += f64::from(height + gap);
    }
    items
}

fn rows_strategy() -> impl Strategy<Value = Vec<(usize, u32)>> {
    prop::collection::vec((1usize..5, 1u32..300), 1..12)
}

// ===== Property 1: Grouping =====

proptest! {
    #[test]
    fn grouping_keeps_every_item(rows in rows_strategy(), gap in 0u32..40) {
        let items = lay_out(&rows, gap);
        let grouped = group_rows(&items);

        let total: usize = grouped.iter().map(|r| r.items.len()).sum();
        prop_assert_eq!(total, items.len());
    }

    #[test]
    fn one_row_per_distinct_top(rows in rows_strategy(), gap in 1u32..40) {
        let items = lay_out(&rows, gap);
        let grouped = group_rows(&items);

        prop_assert_eq!(grouped.len(), rows.len());
        for (row, &(count, height)) in grouped.iter().zip(&rows) {
            prop_assert_eq!(row.items.len(), count);
            prop_assert_eq!(row.height(), f64::from(height));
        }
    }
}

// ===== Property 2-3: Target heights =====

proptest! {
    #[test]
    fn targets_follow_row_sum_plus_gaps(
        heights in prop::collection::vec(0u32..500, 0..20),
        gap in 0u32..50,
        limit in 1usize..25,
    ) {
        let row_heights: Vec<f64> = heights.iter().copied().map(f64::from).collect();
        let limit_rows = RowLimit::new(limit).expect("limit is positive");
        let targets = calculate_heights(&row_heights, f64::from(gap), limit_rows);

        let expected = |n: usize| -> f64 {
            let sum: u32 = heights.iter().take(n).sum();
            let gaps = n.saturating_sub(1) as u32 * gap;
            f64::from(sum + gaps)
        };

        prop_assert_eq!(targets.collapsed, expected(limit.min(heights.len())));
        prop_assert_eq!(targets.expanded, expected(heights.len()));
    }

    #[test]
    fn collapsed_never_exceeds_expanded(
        rows in rows_strategy(),
        gap in 0u32..40,
        limit in 1usize..20,
    ) {
        let items = lay_out(&rows, gap);
        let layout = analyze(&items, &GapStyle::new(format!("{gap}px"), "normal"));
        let targets = layout.target_heights(RowLimit::new(limit).expect("limit is positive"));

        prop_assert!(targets.collapsed <= targets.expanded);
        if limit >= layout.len() {
            prop_assert_eq!(targets.collapsed, targets.expanded);
            prop_assert!(!targets.has_overflow());
        }
    }

    #[test]
    fn measurement_is_idempotent(rows in rows_strategy(), gap in 0u32..40, limit in 1usize..20) {
        let items = lay_out(&rows, gap);
        let style = GapStyle::new("normal", format!("{gap}px"));
        let limit = RowLimit::new(limit).expect("limit is positive");

        let first = analyze(&items, &style).target_heights(limit);
        let second = analyze(&items, &style).target_heights(limit);
        prop_assert_eq!(first, second);
    }
}

// ===== Property 4: Toggling =====

proptest! {
    #[test]
    fn toggle_twice_restores_styles(rows in rows_strategy(), gap in 0u32..40, limit in 1usize..10) {
        let panel = SimulatedPanel::new(lay_out(&rows, gap))
            .with_gap(GapStyle::new(format!("{gap}px"), "normal"))
            .with_limit_attribute(&limit.to_string())
            .with_button(Some("More"), Some("Less"), 1);
        let mut toggler = HeightToggler::create(Some(panel), TogglerOptions::default())
            .expect("valid panel");

        let max_height = |t: &HeightToggler<SimulatedPanel>| {
            t.host().style(StyleProperty::MaxHeight).map(str::to_string)
        };
        let clip = |t: &HeightToggler<SimulatedPanel>| {
            t.host().style(StyleProperty::ClipPath).map(str::to_string)
        };

        let (start_height, start_clip) = (max_height(&toggler), clip(&toggler));
        toggler.toggle_height();
        prop_assert!(toggler.is_expanded());
        toggler.toggle_height();
        prop_assert!(!toggler.is_expanded());

        prop_assert_eq!(max_height(&toggler), start_height);
        prop_assert_eq!(clip(&toggler), start_clip);
    }
}
