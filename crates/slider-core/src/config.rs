use crate::constants::{DEFAULT_AXIS_VALUE, SLIDER_MAX, SLIDER_MIN};
use crate::engine::Axis;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{axis} value {value} is outside [0, 1]")]
    ValueOutOfRange { axis: Axis, value: f64 },
}

/// Mount-time configuration of the widget. Controlled values are optional;
/// an absent value means the axis starts at the 0.5 midpoint and is driven
/// purely by user input.
#[derive(Clone, Debug, Default)]
pub struct SliderConfig {
    pub pleasure_value: Option<f64>,
    pub arousal_value: Option<f64>,
    /// Prefix prepended verbatim to every asset filename.
    pub image_path: String,
    pub pleasure_left_label: Option<String>,
    pub pleasure_right_label: Option<String>,
    pub arousal_left_label: Option<String>,
    pub arousal_right_label: Option<String>,
    /// When set, the left-to-right axis order is drawn once at mount.
    pub randomize_order: bool,
}

impl SliderConfig {
    /// The one failure boundary in the component: a provided controlled
    /// value outside [0, 1] (or non-finite) is rejected here. Once mounted,
    /// the range controls structurally cannot go out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, value) in [
            (Axis::Pleasure, self.pleasure_value),
            (Axis::Arousal, self.arousal_value),
        ] {
            if let Some(value) = value {
                if !value.is_finite() || !(SLIDER_MIN..=SLIDER_MAX).contains(&value) {
                    return Err(ConfigError::ValueOutOfRange { axis, value });
                }
            }
        }
        Ok(())
    }

    /// Seed value for an axis: the controlled value if present, else 0.5.
    pub fn initial_value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Pleasure => self.pleasure_value,
            Axis::Arousal => self.arousal_value,
        }
        .unwrap_or(DEFAULT_AXIS_VALUE)
    }

    /// Optional (left, right) caption texts for an axis. Captions absent
    /// here are omitted from the render entirely.
    pub fn labels(&self, axis: Axis) -> (Option<&str>, Option<&str>) {
        match axis {
            Axis::Pleasure => (
                self.pleasure_left_label.as_deref(),
                self.pleasure_right_label.as_deref(),
            ),
            Axis::Arousal => (
                self.arousal_left_label.as_deref(),
                self.arousal_right_label.as_deref(),
            ),
        }
    }
}
