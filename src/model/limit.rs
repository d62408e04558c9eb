//! Row limit newtype.

use super::geometry::parse_css_int;
use std::num::NonZeroUsize;

/// Number of rows left visible while the panel is collapsed. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowLimit(NonZeroUsize);

impl RowLimit {
    /// Smart constructor. Returns `None` for zero.
    pub fn new(rows: usize) -> Option<Self> {
        NonZeroUsize::new(rows).map(Self)
    }

    /// Parse a limit from a host attribute value.
    ///
    /// Leading-integer semantics apply (`"3"`, `"3rows"` and `"3.9"` all
    /// give 3). Zero, negative and non-numeric values are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let value = parse_css_int(raw)?;
        let rows = usize::try_from(value).ok()?;
        Self::new(rows)
    }

    /// Get the raw row count.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}
