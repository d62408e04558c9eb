//! Per-step snapshots of a simulated panel.

use super::panel::SimulatedPanel;
use crate::host::{StyleProperty, Viewport, EXPANDED_CLASS, VISIBLE_CLASS};
use crate::model::{ExpansionState, Px};
use crate::toggler::HeightToggler;
use serde::Serialize;

/// Observable state of the panel after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Step that produced this snapshot.
    pub step: String,
    /// Expansion state.
    pub state: ExpansionState,
    /// Collapsed target of the last application.
    pub collapsed: Px,
    /// Expanded target of the last application.
    pub expanded: Px,
    /// Container `max-height`.
    pub max_height: Option<String>,
    /// Container `clip-path`.
    pub clip_path: Option<String>,
    /// Whether the toggle control is shown.
    pub button_visible: bool,
    /// Whether the toggle control carries the expanded marker.
    pub button_expanded: bool,
    /// Label texts.
    pub labels: Vec<String>,
    /// Viewport scroll offset.
    pub scroll_y: Px,
    /// Whether the container is being observed.
    pub observing: bool,
    /// Scheduled actions not yet run.
    pub pending: usize,
}

impl StepReport {
    /// Snapshot `toggler` after `step`.
    pub fn capture(step: &str, toggler: &HeightToggler<SimulatedPanel>) -> Self {
        let host = toggler.host();
        let heights = toggler
            .presentation()
            .map(|p| p.heights)
            .unwrap_or_default();

        Self {
            step: step.to_string(),
            state: toggler.state(),
            collapsed: heights.collapsed,
            expanded: heights.expanded,
            max_height: host.style(StyleProperty::MaxHeight).map(str::to_string),
            clip_path: host.style(StyleProperty::ClipPath).map(str::to_string),
            button_visible: host.button_has_class(VISIBLE_CLASS),
            button_expanded: host.button_has_class(EXPANDED_CLASS),
            labels: host.label_texts().into_iter().map(str::to_string).collect(),
            scroll_y: host.scroll_y(),
            observing: host.is_observing(),
            pending: toggler.pending_actions(),
        }
    }

    /// One-line human readable rendering.
    pub fn render_text(&self) -> String {
        let state = match self.state {
            ExpansionState::Collapsed => "collapsed",
            ExpansionState::Expanded => "expanded",
        };
        let mut line = format!(
            "{:<16} {:<9} max-height={} rows={}/{}",
            self.step,
            state,
            self.max_height.as_deref().unwrap_or("-"),
            self.collapsed,
            self.expanded,
        );
        if let Some(clip) = &self.clip_path {
            line.push_str(&format!(" clip={clip}"));
        }
        line.push_str(if self.button_visible {
            " button=visible"
        } else {
            " button=hidden"
        });
        if let Some(label) = self.labels.first() {
            line.push_str(&format!(" label={label:?}"));
        }
        line.push_str(&format!(
            " scroll={} observing={} pending={}",
            self.scroll_y, self.observing, self.pending
        ));
        line
    }
}
