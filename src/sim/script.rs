//! Scripted interactions for the simulated host.

use super::panel::SimulatedPanel;
use crate::host::HostEvent;
use crate::toggler::HeightToggler;

/// One scripted interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Step {
    /// Click the toggle control.
    Click,
    /// Call `toggle_height()` directly.
    Toggle,
    /// Call `expand()`.
    Expand,
    /// Call `collapse()`.
    Collapse,
    /// Deliver a container size notification.
    Resize,
    /// Deliver a viewport resize notification.
    ViewportResize,
    /// Advance the clock by one transition duration and run due actions.
    Tick,
}

impl Step {
    /// Short name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Toggle => "toggle",
            Self::Expand => "expand",
            Self::Collapse => "collapse",
            Self::Resize => "resize",
            Self::ViewportResize => "viewport-resize",
            Self::Tick => "tick",
        }
    }

    /// Perform the step.
    pub fn apply(self, toggler: &mut HeightToggler<SimulatedPanel>) {
        match self {
            Self::Click => toggler.handle_event(HostEvent::ButtonClicked),
            Self::Toggle => toggler.toggle_height(),
            Self::Expand => toggler.expand(),
            Self::Collapse => toggler.collapse(),
            Self::Resize => toggler.handle_event(HostEvent::ContainerResized),
            Self::ViewportResize => toggler.handle_event(HostEvent::ViewportResized),
            Self::Tick => {
                let duration = toggler.transition_duration();
                toggler.host_mut().advance(duration);
                toggler.handle_event(HostEvent::Tick);
            }
        }
    }
}
