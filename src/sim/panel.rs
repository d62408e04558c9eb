//! In-memory implementation of the host traits.

use super::fixture::PanelFixture;
use crate::host::{
    HostClock, PanelDom, ScrollBehavior, StyleProperty, Viewport, CLOSE_TITLE_ATTRIBUTE,
    LIMIT_ATTRIBUTE, OPEN_TITLE_ATTRIBUTE,
};
use crate::layout::GapStyle;
use crate::model::{ItemRect, Px};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// A recorded `scroll_to` request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCall {
    /// Requested offset.
    pub top: Px,
    /// Requested behavior.
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Default)]
struct SimButton {
    dataset: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    labels: Vec<String>,
}

/// Deterministic headless panel.
///
/// Scrolls complete instantly, regardless of the requested behavior. The
/// clock only moves through [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct SimulatedPanel {
    container: bool,
    items: Vec<ItemRect>,
    gap: GapStyle,
    dataset: BTreeMap<String, String>,
    button: Option<SimButton>,
    styles: BTreeMap<StyleProperty, String>,
    scroll_y: Px,
    scroll_calls: Vec<ScrollCall>,
    observing: bool,
    observer_connects: usize,
    listening_viewport: bool,
    now: Duration,
}

impl SimulatedPanel {
    /// Panel with an item container holding `items`, no gap, no limit
    /// attribute and no toggle control.
    pub fn new(items: Vec<ItemRect>) -> Self {
        Self {
            container: true,
            items,
            gap: GapStyle::default(),
            dataset: BTreeMap::new(),
            button: None,
            styles: BTreeMap::new(),
            scroll_y: 0.0,
            scroll_calls: Vec::new(),
            observing: false,
            observer_connects: 0,
            listening_viewport: false,
            now: Duration::ZERO,
        }
    }

    /// Build a panel from a fixture.
    pub fn from_fixture(fixture: &PanelFixture) -> Self {
        let mut panel = Self::new(fixture.items.clone())
            .with_gap(GapStyle::new(fixture.gap.clone(), fixture.row_gap.clone()));
        panel.container = fixture.container;
        panel.scroll_y = fixture.scroll_y;
        if let Some(limit) = &fixture.expand_height {
            panel = panel.with_limit_attribute(limit);
        }
        if let Some(button) = &fixture.button {
            panel = panel.with_button(
                button.open_title.as_deref(),
                button.close_title.as_deref(),
                button.labels,
            );
        }
        panel
    }

    /// Set the wrapper's `data-expand-height`.
    pub fn with_limit_attribute(mut self, raw: &str) -> Self {
        self.dataset
            .insert(LIMIT_ATTRIBUTE.to_string(), raw.to_string());
        self
    }

    /// Set the container's resolved gap.
    pub fn with_gap(mut self, gap: GapStyle) -> Self {
        self.gap = gap;
        self
    }

    /// Add a toggle control with optional titles and `labels` label elements.
    pub fn with_button(mut self, open: Option<&str>, close: Option<&str>, labels: usize) -> Self {
        let mut button = SimButton {
            labels: vec![String::new(); labels],
            ..SimButton::default()
        };
        if let Some(open) = open {
            button
                .dataset
                .insert(OPEN_TITLE_ATTRIBUTE.to_string(), open.to_string());
        }
        if let Some(close) = close {
            button
                .dataset
                .insert(CLOSE_TITLE_ATTRIBUTE.to_string(), close.to_string());
        }
        self.button = Some(button);
        self
    }

    /// Remove the item container.
    pub fn without_container(mut self) -> Self {
        self.container = false;
        self
    }

    /// Start with the viewport scrolled to `top`.
    pub fn with_scroll_y(mut self, top: Px) -> Self {
        self.scroll_y = top;
        self
    }

    /// Replace the item geometry (simulates a reflow).
    pub fn set_items(&mut self, items: Vec<ItemRect>) {
        self.items = items;
    }

    /// Replace the container gap.
    pub fn set_gap(&mut self, gap: GapStyle) {
        self.gap = gap;
    }

    /// Simulate the user scrolling.
    pub fn user_scroll(&mut self, top: Px) {
        self.scroll_y = top;
    }

    /// Advance the clock by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Last value written for `property`.
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.styles.get(&property).map(String::as_str)
    }

    /// Whether the toggle control carries `class`. False without a control.
    pub fn button_has_class(&self, class: &str) -> bool {
        self.button
            .as_ref()
            .is_some_and(|b| b.classes.contains(class))
    }

    /// Current label texts.
    pub fn label_texts(&self) -> Vec<&str> {
        self.button
            .as_ref()
            .map(|b| b.labels.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every `scroll_to` request so far.
    pub fn scroll_calls(&self) -> &[ScrollCall] {
        &self.scroll_calls
    }

    /// Whether container observation is connected.
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// How many times observation has been (re)connected.
    pub fn observer_connects(&self) -> usize {
        self.observer_connects
    }

    /// Whether viewport resize listening is active.
    pub fn is_listening_viewport(&self) -> bool {
        self.listening_viewport
    }
}

impl PanelDom for SimulatedPanel {
    fn has_item_container(&self) -> bool {
        self.container
    }

    fn item_rects(&self) -> Vec<ItemRect> {
        if self.container {
            self.items.clone()
        } else {
            Vec::new()
        }
    }

    fn computed_gap(&self) -> GapStyle {
        self.gap.clone()
    }

    fn dataset(&self, key: &str) -> Option<String> {
        self.dataset.get(key).cloned()
    }

    fn has_toggle_button(&self) -> bool {
        self.button.is_some()
    }

    fn button_dataset(&self, key: &str) -> Option<String> {
        self.button.as_ref()?.dataset.get(key).cloned()
    }

    fn label_count(&self) -> usize {
        self.button.as_ref().map_or(0, |b| b.labels.len())
    }

    fn set_container_style(&mut self, property: StyleProperty, value: &str) {
        self.styles.insert(property, value.to_string());
    }

    fn toggle_button_class(&mut self, class: &str, on: bool) {
        if let Some(button) = self.button.as_mut() {
            if on {
                button.classes.insert(class.to_string());
            } else {
                button.classes.remove(class);
            }
        }
    }

    fn set_label_text(&mut self, text: &str) {
        if let Some(button) = self.button.as_mut() {
            for label in &mut button.labels {
                label.clear();
                label.push_str(text);
            }
        }
    }

    fn observe_container(&mut self) {
        self.observing = true;
        self.observer_connects += 1;
    }

    fn disconnect_observer(&mut self) {
        self.observing = false;
    }
}

impl Viewport for SimulatedPanel {
    fn scroll_y(&self) -> Px {
        self.scroll_y
    }

    fn scroll_to(&mut self, top: Px, behavior: ScrollBehavior) {
        self.scroll_calls.push(ScrollCall { top, behavior });
        self.scroll_y = top.max(0.0);
    }

    fn listen_viewport_resize(&mut self) {
        self.listening_viewport = true;
    }
}

impl HostClock for SimulatedPanel {
    fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ButtonFixture;

    #[test]
    fn from_fixture_copies_dom() {
        let fixture = PanelFixture {
            container: true,
            expand_height: Some("2".to_string()),
            gap: "10px".to_string(),
            row_gap: "normal".to_string(),
            items: vec![ItemRect::new(0.0, 50.0)],
            button: Some(ButtonFixture {
                open_title: Some("More".to_string()),
                close_title: None,
                labels: 2,
            }),
            scroll_y: 40.0,
        };
        let panel = SimulatedPanel::from_fixture(&fixture);

        assert_eq!(panel.dataset(LIMIT_ATTRIBUTE).as_deref(), Some("2"));
        assert_eq!(panel.computed_gap().resolve(), 10.0);
        assert_eq!(panel.item_count(), 1);
        assert_eq!(panel.label_count(), 2);
        assert_eq!(
            panel.button_dataset(OPEN_TITLE_ATTRIBUTE).as_deref(),
            Some("More")
        );
        assert_eq!(panel.button_dataset(CLOSE_TITLE_ATTRIBUTE), None);
        assert_eq!(panel.scroll_y(), 40.0);
    }

    #[test]
    fn missing_container_hides_items() {
        let panel = SimulatedPanel::new(vec![ItemRect::new(0.0, 10.0)]).without_container();
        assert!(!panel.has_item_container());
        assert_eq!(panel.item_count(), 0);
    }

    #[test]
    fn class_toggles_without_button_are_ignored() {
        let mut panel = SimulatedPanel::new(vec![]);
        panel.toggle_button_class("visible", true);
        assert!(!panel.button_has_class("visible"));
    }

    #[test]
    fn scroll_to_records_and_clamps() {
        let mut panel = SimulatedPanel::new(vec![]);
        panel.scroll_to(-20.0, ScrollBehavior::Smooth);
        assert_eq!(panel.scroll_y(), 0.0);
        assert_eq!(
            panel.scroll_calls(),
            &[ScrollCall {
                top: -20.0,
                behavior: ScrollBehavior::Smooth
            }]
        );
    }

    #[test]
    fn clock_advances_only_on_request() {
        let mut panel = SimulatedPanel::new(vec![]);
        assert_eq!(panel.now(), Duration::ZERO);
        panel.advance(Duration::from_millis(300));
        assert_eq!(panel.now(), Duration::from_millis(300));
    }
}
