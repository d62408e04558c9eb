//! rowfold
//!
//! Row-aware expand/collapse engine for "show more / show less" panels.
//!
//! A panel shows a flow or grid of items clipped to the first `limit`
//! visual rows and expands to show every row. The engine measures the live
//! layout, groups items into rows by their top offset, sums row heights
//! and gaps into collapsed/expanded targets, and applies them to the host
//! as an animated max-height transition.
//!
//! Pure core, impure shell:
//! - [`layout`] and [`model`] are pure functions and data.
//! - [`toggler`] and [`reactivity`] own state and talk to a [`host`].
//! - [`sim`] is a headless host for tests and the `rowfold` binary.
//!
//! ```
//! use rowfold::config::TogglerOptions;
//! use rowfold::host::HostEvent;
//! use rowfold::layout::GapStyle;
//! use rowfold::model::ItemRect;
//! use rowfold::sim::SimulatedPanel;
//! use rowfold::toggler::HeightToggler;
//!
//! let panel = SimulatedPanel::new(vec![
//!     ItemRect::new(0.0, 50.0),
//!     ItemRect::new(60.0, 50.0),
//!     ItemRect::new(120.0, 50.0),
//! ])
//! .with_gap(GapStyle::new("10px", "10px"))
//! .with_limit_attribute("2")
//! .with_button(Some("Show more"), Some("Show less"), 1);
//!
//! let mut toggler = HeightToggler::create(Some(panel), TogglerOptions::default())?;
//! assert_eq!(toggler.measure().collapsed, 110.0);
//!
//! toggler.handle_event(HostEvent::ButtonClicked);
//! assert!(toggler.is_expanded());
//! # Ok::<(), rowfold::model::ConstructionError>(())
//! ```

pub mod config;
pub mod host;
pub mod layout;
pub mod logging;
pub mod model;
pub mod reactivity;
pub mod sim;
pub mod toggler;
