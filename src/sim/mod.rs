//! Headless panel host.
//!
//! [`SimulatedPanel`] implements the host traits over in-memory state: item
//! geometry from a [`PanelFixture`], a record of every style/class/label
//! write, a viewport scroll offset and a clock the caller advances by hand.
//! It backs the `rowfold` binary and the test suite.

pub mod fixture;
pub mod panel;
pub mod report;
pub mod script;

pub use fixture::{ButtonFixture, PanelFixture};
pub use panel::{ScrollCall, SimulatedPanel};
pub use report::StepReport;
pub use script::Step;
