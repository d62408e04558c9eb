//! Per-panel options.

use crate::model::{ConstructionError, Px, UpdateEvent};
use crate::reactivity::ReactivityStrategy;
use crate::toggler::presentation::ClipMode;
use crate::toggler::UpdateCallback;
use std::fmt;
use std::time::Duration;

/// Default extra allowance added to the expanded max-height, in pixels.
pub const DEFAULT_OFFSET: Px = 0.0;

/// Default animated-transition duration, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 0.3;

/// Options for one panel.
///
/// Every field has a documented default; callers override what they need
/// with the `with_*` builders or struct update syntax over
/// [`TogglerOptions::default()`].
pub struct TogglerOptions {
    /// Pixels added to the expanded max-height so overflowing decoration
    /// (shadows, borders) is not clipped. Default `0`.
    pub offset: Px,
    /// Transition duration in seconds. Scroll restore and observer resume
    /// run this long after a toggle. Default `0.3`.
    pub duration: f64,
    /// Start expanded. Default `false`.
    pub expanded: bool,
    /// Clip variant. Default [`ClipMode::Inset`].
    pub clip: ClipMode,
    /// Reactivity strategy. Default [`ReactivityStrategy::SizeObserved`].
    pub reactivity: ReactivityStrategy,
    /// Callback run after every height application. Default: none.
    pub on_update: Option<UpdateCallback>,
}

impl Default for TogglerOptions {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            duration: DEFAULT_DURATION_SECS,
            expanded: false,
            clip: ClipMode::default(),
            reactivity: ReactivityStrategy::default(),
            on_update: None,
        }
    }
}

impl fmt::Debug for TogglerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogglerOptions")
            .field("offset", &self.offset)
            .field("duration", &self.duration)
            .field("expanded", &self.expanded)
            .field("clip", &self.clip)
            .field("reactivity", &self.reactivity)
            .field("on_update", &self.on_update.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl TogglerOptions {
    /// Set the expanded-height offset.
    pub fn with_offset(mut self, offset: Px) -> Self {
        self.offset = offset;
        self
    }

    /// Set the transition duration in seconds.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Set the initial expansion state.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the clip variant.
    pub fn with_clip(mut self, clip: ClipMode) -> Self {
        self.clip = clip;
        self
    }

    /// Set the reactivity strategy.
    pub fn with_reactivity(mut self, reactivity: ReactivityStrategy) -> Self {
        self.reactivity = reactivity;
        self
    }

    /// Set the update callback.
    pub fn with_on_update(mut self, callback: impl FnMut(UpdateEvent) + 'static) -> Self {
        self.on_update = Some(Box::new(callback));
        self
    }

    /// Check numeric options.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidOption`] when `offset` or
    /// `duration` is negative, NaN or infinite.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        check_non_negative("offset", self.offset)?;
        check_non_negative("duration", self.duration)?;
        Ok(())
    }

    /// Transition duration as a [`Duration`]. Invalid values map to zero.
    pub fn transition_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.duration).unwrap_or(Duration::ZERO)
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConstructionError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConstructionError::InvalidOption { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documentation() {
        let options = TogglerOptions::default();
        assert_eq!(options.offset, 0.0);
        assert_eq!(options.duration, 0.3);
        assert!(!options.expanded);
        assert_eq!(options.clip, ClipMode::Inset);
        assert_eq!(options.reactivity, ReactivityStrategy::SizeObserved);
        assert!(options.on_update.is_none());
    }

    #[test]
    fn builders_override_defaults() {
        let options = TogglerOptions::default()
            .with_offset(12.0)
            .with_duration(0.5)
            .with_expanded(true)
            .with_clip(ClipMode::None)
            .with_reactivity(ReactivityStrategy::ViewportResize)
            .with_on_update(|_| {});
        assert_eq!(options.offset, 12.0);
        assert_eq!(options.duration, 0.5);
        assert!(options.expanded);
        assert_eq!(options.clip, ClipMode::None);
        assert_eq!(options.reactivity, ReactivityStrategy::ViewportResize);
        assert!(options.on_update.is_some());
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        assert!(TogglerOptions::default().validate().is_ok());
        assert_eq!(
            TogglerOptions::default().with_offset(-1.0).validate(),
            Err(ConstructionError::InvalidOption {
                name: "offset",
                value: -1.0
            })
        );
        assert!(TogglerOptions::default()
            .with_duration(f64::NAN)
            .validate()
            .is_err());
        assert!(TogglerOptions::default()
            .with_duration(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn transition_duration_converts_seconds() {
        let options = TogglerOptions::default().with_duration(0.25);
        assert_eq!(options.transition_duration(), Duration::from_millis(250));
        let zero = TogglerOptions::default().with_duration(0.0);
        assert_eq!(zero.transition_duration(), Duration::ZERO);
    }

    #[test]
    fn debug_hides_callback_body() {
        let options = TogglerOptions::default().with_on_update(|_| {});
        let rendered = format!("{options:?}");
        assert!(rendered.contains("<callback>"));
    }
}
