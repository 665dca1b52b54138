use crate::engine::Axis;
use rand::Rng;

/// Left-to-right presentation order of the two axes. Decided once when the
/// widget mounts and held constant for the instance lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresentationOrder([Axis; 2]);

impl PresentationOrder {
    pub fn fixed() -> Self {
        Self([Axis::Pleasure, Axis::Arousal])
    }

    /// Single binary decision from one uniform draw in [0, 1): keep the
    /// fixed order unless randomization is on and the draw falls below 0.5,
    /// in which case the two axes swap. Two elements only, so a half/half
    /// split is a full uniform shuffle.
    pub fn from_draw(randomize: bool, draw: f64) -> Self {
        if randomize && draw < 0.5 {
            Self([Axis::Arousal, Axis::Pleasure])
        } else {
            Self::fixed()
        }
    }

    /// Seedable convenience for host-side callers and tests.
    pub fn randomized(rng: &mut impl Rng) -> Self {
        Self::from_draw(true, rng.gen::<f64>())
    }

    pub fn axes(&self) -> [Axis; 2] {
        self.0
    }
}

impl Default for PresentationOrder {
    fn default() -> Self {
        Self::fixed()
    }
}
