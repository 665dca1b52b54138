// Control bounds shared by the state engine and the rendered range inputs.

pub const DEFAULT_AXIS_VALUE: f64 = 0.5;
pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 1.0;
pub const SLIDER_STEP: f64 = 0.01;

// Fixed AffectiveSlider asset filenames, resolved against the configured
// image path prefix. Shipping the PNGs themselves is a deployment concern.
pub const PLEASURE_LEFT_IMAGE: &str = "AS_unhappy.png";
pub const PLEASURE_RIGHT_IMAGE: &str = "AS_happy.png";
pub const AROUSAL_LEFT_IMAGE: &str = "AS_sleepy.png";
pub const AROUSAL_RIGHT_IMAGE: &str = "AS_wideawake.png";
pub const INTENSITY_CUE_IMAGE: &str = "AS_intensity_cue.png";
