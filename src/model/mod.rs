//! Domain model for row-based expand/collapse panels.
//!
//! Everything here is plain data: measured item geometry, the row limit,
//! the two-state expansion enum and the error taxonomy. Nothing in this
//! module talks to the host.

pub mod error;
pub mod geometry;
pub mod limit;
pub mod state;

pub use error::{AppError, ConstructionError, FixtureError};
pub use geometry::{parse_css_float, parse_css_int, round2, ItemRect, Px};
pub use limit::RowLimit;
pub use state::{ExpansionState, UpdateEvent};
