//! Asset URL resolution: plain prefix concatenation over the fixed
//! AffectiveSlider filename set.

use crate::constants::{
    AROUSAL_LEFT_IMAGE, AROUSAL_RIGHT_IMAGE, INTENSITY_CUE_IMAGE, PLEASURE_LEFT_IMAGE,
    PLEASURE_RIGHT_IMAGE,
};
use crate::engine::Axis;

#[inline]
pub fn left_image(axis: Axis) -> &'static str {
    match axis {
        Axis::Pleasure => PLEASURE_LEFT_IMAGE,
        Axis::Arousal => AROUSAL_LEFT_IMAGE,
    }
}

#[inline]
pub fn right_image(axis: Axis) -> &'static str {
    match axis {
        Axis::Pleasure => PLEASURE_RIGHT_IMAGE,
        Axis::Arousal => AROUSAL_RIGHT_IMAGE,
    }
}

#[inline]
pub fn resolve(image_path: &str, filename: &str) -> String {
    format!("{image_path}{filename}")
}

/// Shared intensity-cue image, rendered under both axes.
#[inline]
pub fn intensity_cue(image_path: &str) -> String {
    resolve(image_path, INTENSITY_CUE_IMAGE)
}

/// Resolved left/right icon sources for one axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisImages {
    pub left: String,
    pub right: String,
}

impl AxisImages {
    pub fn for_axis(image_path: &str, axis: Axis) -> Self {
        Self {
            left: resolve(image_path, left_image(axis)),
            right: resolve(image_path, right_image(axis)),
        }
    }
}
