//! Expansion state and update notifications.

use serde::{Deserialize, Serialize};

/// The two rest states of a panel.
///
/// Neither state is more terminal than the other; the panel may sit in
/// either indefinitely and only explicit expand/collapse/toggle requests
/// move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpansionState {
    /// Only the first `limit` rows are visible.
    #[default]
    Collapsed,
    /// All rows are visible.
    Expanded,
}

impl ExpansionState {
    /// Build from a boolean "is expanded" flag.
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }

    /// Whether this is the expanded state.
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    /// The opposite state.
    pub fn flipped(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }
}

/// Payload handed to the update callback after every height application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateEvent {
    /// Expansion state the presentation was applied for.
    pub is_expanded: bool,
}
