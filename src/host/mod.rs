//! Host boundary.
//!
//! The engine never touches a document directly. Whatever embeds it (a
//! browser binding, a native widget tree, the headless [`crate::sim`]
//! panel) implements these traits and pushes [`HostEvent`]s in.
//!
//! Design goals:
//! - **Host-driven**: size changes, clicks and time all arrive as events.
//! - **Deterministic time**: the host owns a monotonic clock and advances
//!   it explicitly; scheduled actions only run when the host says so.
//! - **Non-blocking**: every call is a short synchronous read or write.

use crate::layout::GapStyle;
use crate::model::{ItemRect, Px};
use std::time::Duration;

/// Wrapper attribute carrying the row limit (`data-expand-height`).
pub const LIMIT_ATTRIBUTE: &str = "expand-height";
/// Toggle control attribute with the collapsed-state label (`data-open-title`).
pub const OPEN_TITLE_ATTRIBUTE: &str = "open-title";
/// Toggle control attribute with the expanded-state label (`data-close-title`).
pub const CLOSE_TITLE_ATTRIBUTE: &str = "close-title";
/// Class set on the toggle control while there is something to expand.
pub const VISIBLE_CLASS: &str = "visible";
/// Class set on the toggle control while the panel is expanded.
pub const EXPANDED_CLASS: &str = "expanded";

/// Container style properties the engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    /// `max-height`
    MaxHeight,
    /// `clip-path`
    ClipPath,
    /// `transition`
    Transition,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::MaxHeight => "max-height",
            Self::ClipPath => "clip-path",
            Self::Transition => "transition",
        }
    }
}

/// How a viewport scroll should be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately.
    Instant,
    /// Animate the scroll.
    Smooth,
}

/// The panel's elements as seen by the engine.
///
/// The implementor represents the wrapper element: it locates the item
/// container, the row items and the optional toggle control inside it.
pub trait PanelDom {
    /// Whether the wrapper holds an item container (`data-expand-container`).
    fn has_item_container(&self) -> bool;

    /// Bounding boxes of the row items (`data-row-item`), in document order.
    fn item_rects(&self) -> Vec<ItemRect>;

    /// Number of row items.
    fn item_count(&self) -> usize {
        self.item_rects().len()
    }

    /// Resolved gap properties of the item container.
    fn computed_gap(&self) -> GapStyle;

    /// Data attribute on the wrapper, keyed without the `data-` prefix.
    fn dataset(&self, key: &str) -> Option<String>;

    /// Whether the wrapper holds a toggle control (`data-expand-button`).
    fn has_toggle_button(&self) -> bool;

    /// Data attribute on the toggle control, keyed without the `data-` prefix.
    fn button_dataset(&self, key: &str) -> Option<String>;

    /// Number of label elements inside the toggle control.
    fn label_count(&self) -> usize;

    /// Write one style property on the item container.
    fn set_container_style(&mut self, property: StyleProperty, value: &str);

    /// Add (`on == true`) or remove a class on the toggle control.
    fn toggle_button_class(&mut self, class: &str, on: bool);

    /// Replace the text of every label element.
    fn set_label_text(&mut self, text: &str);

    /// Start delivering [`HostEvent::ContainerResized`] for the item container.
    fn observe_container(&mut self);

    /// Stop delivering [`HostEvent::ContainerResized`].
    fn disconnect_observer(&mut self);
}

/// The scrollable viewport the panel lives in.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> Px;

    /// Scroll vertically to `top`.
    fn scroll_to(&mut self, top: Px, behavior: ScrollBehavior);

    /// Start delivering [`HostEvent::ViewportResized`].
    fn listen_viewport_resize(&mut self);
}

/// Monotonic clock owned by the host.
pub trait HostClock {
    /// Time elapsed since an arbitrary, fixed origin.
    fn now(&self) -> Duration;
}

/// Everything a panel host provides.
pub trait PanelHost: PanelDom + Viewport + HostClock {}

impl<T: PanelDom + Viewport + HostClock> PanelHost for T {}

/// Events the host pushes into a toggler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The toggle control was activated.
    ButtonClicked,
    /// The observed item container changed size.
    ContainerResized,
    /// The viewport was resized.
    ViewportResized,
    /// The host clock advanced; run any scheduled actions now due.
    Tick,
}
