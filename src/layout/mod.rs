//! Row analysis and height reduction.
//!
//! Pure functions over measured geometry:
//!
//! - [`analyzer`] groups items into visual rows and resolves the row gap.
//! - [`heights`] reduces rows into collapsed/expanded target heights.
//!
//! Neither module caches; both are safe to call on every layout event.

pub mod analyzer;
pub mod heights;

pub use analyzer::{analyze, group_rows, GapStyle, Row, RowLayout};
pub use heights::{calculate_heights, TargetHeights};
