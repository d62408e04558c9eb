//! What a height application writes to the host.
//!
//! A [`Presentation`] is computed from the expansion state and the fresh
//! target heights, then rendered to CSS values. Keeping it as a value lets
//! the toggler compare consecutive applications and skip redundant writes.

use crate::layout::TargetHeights;
use crate::model::{ExpansionState, Px};
use serde::{Deserialize, Serialize};

/// Whether the container is additionally clipped while collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClipMode {
    /// Clip to an inset keyed to the collapsed height. While the
    /// max-height animates, the clip animates with it, which crops content
    /// that would otherwise show below the shrinking bound.
    #[default]
    Inset,
    /// Only constrain `max-height`.
    None,
}

/// `clip-path: inset(...)` region for the container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClipInset {
    /// Bleed allowed on every side for shadows and borders.
    pub bleed: Px,
    /// Visible height from the top while collapsed; `None` when expanded.
    pub visible_height: Option<Px>,
}

impl ClipInset {
    /// Render as a CSS `inset()` value.
    pub fn css(&self) -> String {
        let o = self.bleed;
        match self.visible_height {
            None => format!("inset(-{o}px)"),
            Some(h) => format!("inset(-{o}px -{o}px calc(100% - {h}px) -{o}px)"),
        }
    }
}

/// Open/close label pair read from the toggle control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonLabels {
    /// Label shown while collapsed.
    pub open: Option<String>,
    /// Label shown while expanded.
    pub close: Option<String>,
    /// Number of label elements to update.
    pub count: usize,
}

impl ButtonLabels {
    /// Label text for `state`, or `None` when there are no label elements.
    ///
    /// A missing title renders as empty text.
    pub fn text_for(&self, state: ExpansionState) -> Option<String> {
        if self.count == 0 {
            return None;
        }
        let title = match state {
            ExpansionState::Expanded => &self.close,
            ExpansionState::Collapsed => &self.open,
        };
        Some(title.clone().unwrap_or_default())
    }
}

/// Fully resolved output of one height application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    /// State the presentation was computed for.
    pub state: ExpansionState,
    /// Targets it was computed from.
    pub heights: TargetHeights,
    /// Value for the container's `max-height`.
    pub max_height: Px,
    /// Clip region, when clipping is enabled.
    pub clip: Option<ClipInset>,
    /// Whether the toggle control should be shown.
    pub button_visible: bool,
    /// Whether the toggle control carries the expanded marker.
    pub button_expanded: bool,
    /// Label text, when the control has label elements.
    pub label: Option<String>,
}

impl Presentation {
    /// Compute the presentation for `state` given fresh `heights`.
    ///
    /// Expanded panels get `expanded + offset` so overflowing decoration is
    /// not cut off; collapsed panels get exactly the collapsed height.
    pub fn compute(
        state: ExpansionState,
        heights: TargetHeights,
        offset: Px,
        clip: ClipMode,
        labels: &ButtonLabels,
    ) -> Self {
        let max_height = match state {
            ExpansionState::Expanded => heights.expanded + offset,
            ExpansionState::Collapsed => heights.collapsed,
        };
        let clip = match clip {
            ClipMode::None => None,
            ClipMode::Inset => Some(ClipInset {
                bleed: offset,
                visible_height: (!state.is_expanded()).then_some(heights.collapsed),
            }),
        };

        Self {
            state,
            heights,
            max_height,
            clip,
            button_visible: heights.has_overflow(),
            button_expanded: state.is_expanded(),
            label: labels.text_for(state),
        }
    }

    /// `max-height` as a CSS value.
    pub fn max_height_css(&self) -> String {
        format!("{}px", self.max_height)
    }

    /// `clip-path` as a CSS value, when clipping is enabled.
    pub fn clip_css(&self) -> Option<String> {
        self.clip.map(|clip| clip.css())
    }
}

/// `transition` value installed on the container at initialization.
pub fn transition_css(duration_secs: f64, clip: ClipMode) -> String {
    match clip {
        ClipMode::None => format!("max-height {duration_secs}s ease-in-out"),
        ClipMode::Inset => format!(
            "max-height {duration_secs}s ease-in-out, clip-path {duration_secs}s ease-in-out"
        ),
    }
}
