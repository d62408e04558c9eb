//! Reactivity adapter: deciding when heights have gone stale.
//!
//! Two strategies are supported:
//!
//! - [`ReactivityStrategy::SizeObserved`] listens to size changes of the
//!   item container. Applying a new height resizes the container, which
//!   would notify the observer again, so observation is suspended while a
//!   toggle transition runs. The suspension is held by the transition that
//!   acquired it and only that transition may release it.
//! - [`ReactivityStrategy::ViewportResize`] listens to viewport resizes.
//!   Those are independent of the container height, so nothing needs to be
//!   suspended. Content-only reflows go unnoticed.
//!
//! Container size changes that happen while observation is suspended are
//! dropped, not replayed on resume.

use crate::host::{HostEvent, PanelHost};
use crate::toggler::schedule::TransitionId;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Source of layout-change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReactivityStrategy {
    /// Observe the item container's size.
    #[default]
    SizeObserved,
    /// Listen for viewport resizes only.
    ViewportResize,
}

/// Observation state of the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverGate {
    /// Not yet attached to the host.
    Detached,
    /// Notifications are acted on.
    Connected,
    /// Container observation is disconnected until `transition` releases it.
    Suspended {
        /// Transition holding the suspension.
        transition: TransitionId,
    },
}

/// Tracks the subscription for one panel.
#[derive(Debug, Clone)]
pub struct Reactivity {
    strategy: ReactivityStrategy,
    gate: ObserverGate,
}

impl Reactivity {
    /// Create an adapter for `strategy`. Call [`attach`](Self::attach) next.
    pub fn new(strategy: ReactivityStrategy) -> Self {
        Self {
            strategy,
            gate: ObserverGate::Detached,
        }
    }

    /// Strategy in use.
    pub fn strategy(&self) -> ReactivityStrategy {
        self.strategy
    }

    /// Current observation state.
    pub fn gate(&self) -> ObserverGate {
        self.gate
    }

    /// Subscribe to the host's notifications.
    pub fn attach<H: PanelHost>(&mut self, host: &mut H) {
        match self.strategy {
            ReactivityStrategy::SizeObserved => host.observe_container(),
            ReactivityStrategy::ViewportResize => host.listen_viewport_resize(),
        }
        self.gate = ObserverGate::Connected;
    }

    /// Suspend observation for the lifetime of `transition`.
    ///
    /// Returns `true` when the caller must arrange a matching
    /// [`release`](Self::release). A newer transition takes over a
    /// suspension still held by an older one.
    pub fn suspend_for<H: PanelHost>(&mut self, host: &mut H, transition: TransitionId) -> bool {
        match (self.strategy, self.gate) {
            (ReactivityStrategy::ViewportResize, _) | (_, ObserverGate::Detached) => false,
            (ReactivityStrategy::SizeObserved, ObserverGate::Connected) => {
                host.disconnect_observer();
                self.gate = ObserverGate::Suspended { transition };
                true
            }
            (ReactivityStrategy::SizeObserved, ObserverGate::Suspended { .. }) => {
                self.gate = ObserverGate::Suspended { transition };
                true
            }
        }
    }

    /// Release the suspension held by `transition`.
    ///
    /// A release from a transition that no longer holds the suspension is
    /// ignored.
    pub fn release<H: PanelHost>(&mut self, host: &mut H, transition: TransitionId) {
        match self.gate {
            ObserverGate::Suspended { transition: holder } if holder == transition => {
                host.observe_container();
                self.gate = ObserverGate::Connected;
            }
            _ => trace!(
                transition = transition.get(),
                gate = ?self.gate,
                "Ignoring stale observer release"
            ),
        }
    }

    /// Whether `event` should trigger a height recomputation.
    pub fn accepts(&self, event: HostEvent) -> bool {
        match (self.strategy, event) {
            (ReactivityStrategy::SizeObserved, HostEvent::ContainerResized) => {
                self.gate == ObserverGate::Connected
            }
            (ReactivityStrategy::ViewportResize, HostEvent::ViewportResized) => {
                self.gate == ObserverGate::Connected
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "reactivity_tests.rs"]
mod tests;
