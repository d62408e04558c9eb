//! Tests for observation gating.

use super::*;
use crate::sim::SimulatedPanel;

fn host() -> SimulatedPanel {
    SimulatedPanel::new(Vec::new())
}

#[test]
fn detached_adapter_accepts_nothing() {
    let reactivity = Reactivity::new(ReactivityStrategy::SizeObserved);
    assert_eq!(reactivity.gate(), ObserverGate::Detached);
    assert!(!reactivity.accepts(HostEvent::ContainerResized));
}

#[test]
fn size_observed_attach_observes_container() {
    let mut host = host();
    let mut reactivity = Reactivity::new(ReactivityStrategy::SizeObserved);
    reactivity.attach(&mut host);

    assert!(host.is_observing());
    assert!(!host.is_listening_viewport());
    assert!(reactivity.accepts(HostEvent::ContainerResized));
    assert!(!reactivity.accepts(HostEvent::ViewportResized));
    assert!(!reactivity.accepts(HostEvent::Tick));
}

#[test]
fn viewport_attach_listens_for_resize() {
    let mut host = host();
    let mut reactivity = Reactivity::new(ReactivityStrategy::ViewportResize);
    reactivity.attach(&mut host);

    assert!(host.is_listening_viewport());
    assert!(!host.is_observing());
    assert!(reactivity.accepts(HostEvent::ViewportResized));
    assert!(!reactivity.accepts(HostEvent::ContainerResized));
}

#[test]
fn suspension_is_released_only_by_its_holder() {
    let mut host = host();
    let mut reactivity = Reactivity::new(ReactivityStrategy::SizeObserved);
    reactivity.attach(&mut host);

    let first = TransitionId::NONE.next();
    let second = first.next();

    assert!(reactivity.suspend_for(&mut host, first));
    assert!(!host.is_observing());
    assert!(!reactivity.accepts(HostEvent::ContainerResized));

    assert!(reactivity.suspend_for(&mut host, second));
    reactivity.release(&mut host, first);
    assert_eq!(
        reactivity.gate(),
        ObserverGate::Suspended { transition: second }
    );
    assert!(!host.is_observing());

    reactivity.release(&mut host, second);
    assert_eq!(reactivity.gate(), ObserverGate::Connected);
    assert!(host.is_observing());
    assert_eq!(host.observer_connects(), 2);
}

#[test]
fn viewport_strategy_never_suspends() {
    let mut host = host();
    let mut reactivity = Reactivity::new(ReactivityStrategy::ViewportResize);
    reactivity.attach(&mut host);

    assert!(!reactivity.suspend_for(&mut host, TransitionId::NONE.next()));
    assert_eq!(reactivity.gate(), ObserverGate::Connected);
}

#[test]
fn release_while_connected_is_ignored() {
    let mut host = host();
    let mut reactivity = Reactivity::new(ReactivityStrategy::SizeObserved);
    reactivity.attach(&mut host);

    reactivity.release(&mut host, TransitionId::NONE.next());
    assert_eq!(host.observer_connects(), 1);
    assert_eq!(reactivity.gate(), ObserverGate::Connected);
}
