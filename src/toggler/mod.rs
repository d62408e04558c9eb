//! Transition controller.
//!
//! [`HeightToggler`] owns the expansion state of one panel. Every
//! application measures the live layout, reduces it to target heights and
//! writes the resulting [`Presentation`] to the host. Toggles additionally
//! open a transition: size observation is suspended and follow-up actions
//! (scroll restore, observer resume) are scheduled for when the animated
//! transition has finished.
//!
//! State machine: `Collapsed <-> Expanded` via [`expand`](HeightToggler::expand),
//! [`collapse`](HeightToggler::collapse) and
//! [`toggle_height`](HeightToggler::toggle_height).
//! [`set_height`](HeightToggler::set_height) reapplies without changing
//! state.

pub mod presentation;
pub mod schedule;

use crate::config::TogglerOptions;
use crate::host::{
    HostEvent, PanelHost, ScrollBehavior, StyleProperty, CLOSE_TITLE_ATTRIBUTE, EXPANDED_CLASS,
    LIMIT_ATTRIBUTE, OPEN_TITLE_ATTRIBUTE, VISIBLE_CLASS,
};
use crate::layout::{analyze, TargetHeights};
use crate::model::{ConstructionError, ExpansionState, Px, RowLimit, UpdateEvent};
use crate::reactivity::{ObserverGate, Reactivity, ReactivityStrategy};
use presentation::{transition_css, ButtonLabels, ClipMode, Presentation};
use schedule::{ActionQueue, ScheduledAction, TransitionId};
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace};

/// Callback invoked after every height application.
pub type UpdateCallback = Box<dyn FnMut(UpdateEvent)>;

/// Expand/collapse controller for one panel.
pub struct HeightToggler<H: PanelHost> {
    host: H,
    limit: RowLimit,
    offset: Px,
    duration_secs: f64,
    duration: Duration,
    clip: ClipMode,
    state: ExpansionState,
    has_button: bool,
    labels: ButtonLabels,
    on_update: UpdateCallback,
    reactivity: Reactivity,
    queue: ActionQueue,
    transition: TransitionId,
    previous_scroll: Option<Px>,
    last_applied: Option<Presentation>,
}

impl<H: PanelHost> fmt::Debug for HeightToggler<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeightToggler")
            .field("limit", &self.limit)
            .field("offset", &self.offset)
            .field("duration", &self.duration)
            .field("clip", &self.clip)
            .field("state", &self.state)
            .field("reactivity", &self.reactivity)
            .field("transition", &self.transition)
            .field("pending", &self.queue.len())
            .finish_non_exhaustive()
    }
}

impl<H: PanelHost> HeightToggler<H> {
    /// Validate the panel, install the transition style, subscribe to
    /// layout changes and apply the initial height.
    ///
    /// `wrapper` is `None` when the host could not locate the panel at all.
    ///
    /// # Errors
    ///
    /// Fails fast, in this order, when the wrapper is missing, it has no
    /// item container, the container has no items, the `expand-height`
    /// attribute is not a positive integer, or a numeric option is invalid.
    pub fn create(wrapper: Option<H>, options: TogglerOptions) -> Result<Self, ConstructionError> {
        let host = wrapper.ok_or(ConstructionError::NoWrapper)?;

        if !host.has_item_container() {
            return Err(ConstructionError::NoItemContainer);
        }
        if host.item_count() == 0 {
            return Err(ConstructionError::NoItems);
        }
        let raw_limit = host.dataset(LIMIT_ATTRIBUTE);
        let limit = raw_limit
            .as_deref()
            .and_then(RowLimit::parse)
            .ok_or_else(|| ConstructionError::InvalidLimit {
                raw: raw_limit.clone(),
            })?;
        options.validate()?;

        let has_button = host.has_toggle_button();
        let labels = if has_button {
            ButtonLabels {
                open: host.button_dataset(OPEN_TITLE_ATTRIBUTE),
                close: host.button_dataset(CLOSE_TITLE_ATTRIBUTE),
                count: host.label_count(),
            }
        } else {
            ButtonLabels::default()
        };

        let duration = options.transition_duration();
        let mut toggler = Self {
            host,
            limit,
            offset: options.offset,
            duration_secs: options.duration,
            duration,
            clip: options.clip,
            state: ExpansionState::from_expanded(options.expanded),
            has_button,
            labels,
            on_update: options.on_update.unwrap_or_else(|| Box::new(|_| {})),
            reactivity: Reactivity::new(options.reactivity),
            queue: ActionQueue::new(),
            transition: TransitionId::NONE,
            previous_scroll: None,
            last_applied: None,
        };
        toggler.initialize();
        Ok(toggler)
    }

    fn initialize(&mut self) {
        let transition = transition_css(self.duration_secs, self.clip);
        self.host
            .set_container_style(StyleProperty::Transition, &transition);
        self.reactivity.attach(&mut self.host);

        debug!(
            limit = self.limit.get(),
            state = ?self.state,
            strategy = ?self.reactivity.strategy(),
            has_button = self.has_button,
            "Panel initialized"
        );

        self.set_height();
    }

    /// Replace the update callback. Only the latest registration fires.
    pub fn on_update(&mut self, callback: impl FnMut(UpdateEvent) + 'static) {
        self.on_update = Box::new(callback);
    }

    /// Force the expanded state and apply it.
    pub fn expand(&mut self) {
        debug!(from = ?self.state, "Expand requested");
        self.state = ExpansionState::Expanded;
        self.set_height();
    }

    /// Force the collapsed state and apply it.
    ///
    /// Never scrolls. A scroll offset captured by an earlier expanding
    /// toggle is discarded along with any restore still pending, so a later
    /// toggle cannot jump back to it.
    pub fn collapse(&mut self) {
        let discarded = self.previous_scroll.take();
        let cancelled = self.queue.cancel_action(ScheduledAction::RestoreScroll);
        debug!(from = ?self.state, ?discarded, cancelled, "Collapse requested");
        self.state = ExpansionState::Collapsed;
        self.set_height();
    }

    /// Flip the expansion state and apply it as an animated transition.
    ///
    /// Expanding remembers the current scroll offset; collapsing scrolls
    /// back to it once the transition duration has elapsed. Under the
    /// size-observed strategy the observer stays disconnected for the
    /// same duration. Starting a toggle cancels whatever an earlier toggle
    /// still had pending.
    pub fn toggle_height(&mut self) {
        let was = self.state;
        self.state = was.flipped();

        self.transition = self.transition.next();
        let cancelled = self.queue.cancel_superseded(self.transition);
        let due = self.host.now().saturating_add(self.duration);

        debug!(
            transition = self.transition.get(),
            from = ?was,
            to = ?self.state,
            cancelled,
            "Toggle transition started"
        );

        let suspended = self.reactivity.suspend_for(&mut self.host, self.transition);

        if !was.is_expanded() {
            self.previous_scroll = Some(self.host.scroll_y());
        }

        self.set_height();

        if was.is_expanded() {
            self.queue
                .schedule(due, self.transition, ScheduledAction::RestoreScroll);
        }
        if suspended {
            self.queue
                .schedule(due, self.transition, ScheduledAction::ResumeObserver);
        }

        if self.duration.is_zero() {
            self.run_due_actions();
        }
    }

    /// Recompute heights and reapply the current state.
    pub fn set_height(&mut self) {
        let heights = self.measure();
        self.apply(heights);
    }

    /// Dispatch a host event.
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::ButtonClicked => {
                if self.has_button {
                    self.toggle_height();
                } else {
                    trace!("Click ignored: panel has no toggle control");
                }
            }
            HostEvent::ContainerResized | HostEvent::ViewportResized => {
                if self.reactivity.accepts(event) {
                    self.refresh_if_changed();
                } else {
                    trace!(?event, gate = ?self.reactivity.gate(), "Layout event ignored");
                }
            }
            HostEvent::Tick => self.run_due_actions(),
        }
    }

    /// Run every scheduled action whose due time has passed.
    pub fn run_due_actions(&mut self) {
        let now = self.host.now();
        for (transition, action) in self.queue.take_due(now) {
            match action {
                ScheduledAction::RestoreScroll => match self.previous_scroll.take() {
                    Some(top) => {
                        debug!(transition = transition.get(), top, "Restoring scroll position");
                        self.host.scroll_to(top, ScrollBehavior::Smooth);
                    }
                    None => trace!(
                        transition = transition.get(),
                        "No scroll position captured; nothing to restore"
                    ),
                },
                ScheduledAction::ResumeObserver => {
                    self.reactivity.release(&mut self.host, transition);
                }
            }
        }
    }

    /// Measure the live layout without writing anything.
    pub fn measure(&self) -> TargetHeights {
        let items = self.host.item_rects();
        let gap = self.host.computed_gap();
        analyze(&items, &gap).target_heights(self.limit)
    }

    fn refresh_if_changed(&mut self) {
        let heights = self.measure();
        let unchanged = self
            .last_applied
            .as_ref()
            .is_some_and(|last| last.heights == heights && last.state == self.state);
        if unchanged {
            trace!(?heights, "Layout notification with unchanged heights");
            return;
        }
        self.apply(heights);
    }

    fn apply(&mut self, heights: TargetHeights) {
        let presentation =
            Presentation::compute(self.state, heights, self.offset, self.clip, &self.labels);

        self.host
            .set_container_style(StyleProperty::MaxHeight, &presentation.max_height_css());
        if let Some(clip) = presentation.clip_css() {
            self.host.set_container_style(StyleProperty::ClipPath, &clip);
        }

        if self.has_button {
            self.host
                .toggle_button_class(VISIBLE_CLASS, presentation.button_visible);
            self.host
                .toggle_button_class(EXPANDED_CLASS, presentation.button_expanded);
            if let Some(label) = &presentation.label {
                self.host.set_label_text(label);
            }
        }

        trace!(
            state = ?self.state,
            collapsed = heights.collapsed,
            expanded = heights.expanded,
            max_height = presentation.max_height,
            "Height applied"
        );

        (self.on_update)(UpdateEvent {
            is_expanded: self.state.is_expanded(),
        });
        self.last_applied = Some(presentation);
    }

    /// Current expansion state.
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Whether the panel is expanded.
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Row limit parsed at construction.
    pub fn limit(&self) -> RowLimit {
        self.limit
    }

    /// Most recent application, if any.
    pub fn presentation(&self) -> Option<&Presentation> {
        self.last_applied.as_ref()
    }

    /// Transition duration.
    pub fn transition_duration(&self) -> Duration {
        self.duration
    }

    /// Id of the most recent toggle transition.
    pub fn current_transition(&self) -> TransitionId {
        self.transition
    }

    /// Number of scheduled actions not yet run.
    pub fn pending_actions(&self) -> usize {
        self.queue.len()
    }

    /// Scroll offset captured by the last expanding toggle, until consumed.
    pub fn previous_scroll_position(&self) -> Option<Px> {
        self.previous_scroll
    }

    /// Reactivity strategy in use.
    pub fn reactivity_strategy(&self) -> ReactivityStrategy {
        self.reactivity.strategy()
    }

    /// Observation state.
    pub fn observer_gate(&self) -> ObserverGate {
        self.reactivity.gate()
    }

    /// Borrow the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutably borrow the host, e.g. to reflow items or advance its clock.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Give the host back.
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
#[path = "toggler_tests.rs"]
mod tests;
