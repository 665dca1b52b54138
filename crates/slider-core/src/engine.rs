use crate::config::{ConfigError, SliderConfig};
use crate::constants::{SLIDER_MAX, SLIDER_MIN};
use crate::order::PresentationOrder;
use std::fmt;

/// The two self-report dimensions. There are exactly two; the widget does
/// not generalize to arbitrary axis sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Pleasure,
    Arousal,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Pleasure, Axis::Arousal];

    /// Lowercase identifier used in element names and event payloads.
    pub fn name(self) -> &'static str {
        match self {
            Axis::Pleasure => "pleasure",
            Axis::Arousal => "arousal",
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Axis::Pleasure => 0,
            Axis::Arousal => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Combined snapshot of both axis values, as carried by `change` and
/// `interacted` payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValuePair {
    pub pleasure: f64,
    pub arousal: f64,
}

/// Events produced by the engine in response to user input. The caller
/// supplies the output buffer and drains it in the same synchronous turn,
/// so per-axis updates and the combined change snapshot always travel
/// together.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// A user-driven change to one axis, carrying the clamped value.
    ValueUpdate { axis: Axis, value: f64 },
    /// Emitted alongside every `ValueUpdate`, carrying both current values.
    Change(ValuePair),
    /// First press on an axis's control; at most one per axis per instance.
    Interacted { axis: Axis, values: ValuePair },
}

/// State machine behind the widget: two axis values, two one-shot
/// interaction latches, and the presentation order fixed at construction.
pub struct SliderEngine {
    values: [f64; 2],
    interacted: [bool; 2],
    order: PresentationOrder,
}

impl SliderEngine {
    /// Validates the configuration, seeds each axis from its controlled
    /// value (default 0.5), and pins the presentation order. The order is
    /// decided once here and never recomputed.
    pub fn new(config: &SliderConfig, order: PresentationOrder) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            values: [
                config.initial_value(Axis::Pleasure),
                config.initial_value(Axis::Arousal),
            ],
            interacted: [false; 2],
            order,
        })
    }

    pub fn value(&self, axis: Axis) -> f64 {
        self.values[axis.index()]
    }

    pub fn values(&self) -> ValuePair {
        ValuePair {
            pleasure: self.values[Axis::Pleasure.index()],
            arousal: self.values[Axis::Arousal.index()],
        }
    }

    pub fn order(&self) -> PresentationOrder {
        self.order
    }

    pub fn has_interacted(&self, axis: Axis) -> bool {
        self.interacted[axis.index()]
    }

    /// User-driven change: clamp to [0, 1], store, and emit the per-axis
    /// update followed by the combined change snapshot.
    pub fn set_value(&mut self, axis: Axis, value: f64, out_events: &mut Vec<SliderEvent>) {
        let clamped = clamp_axis(value);
        if clamped != value {
            log::debug!("[slider] {} input {} clamped to {}", axis, value, clamped);
        }
        self.values[axis.index()] = clamped;
        out_events.push(SliderEvent::ValueUpdate {
            axis,
            value: clamped,
        });
        out_events.push(SliderEvent::Change(self.values()));
    }

    /// Pointer-down / touch-start on an axis's control. The first press
    /// emits `Interacted` with the value pair as it stood before any
    /// drag-induced change from the same gesture, then latches; every later
    /// press on that axis is a no-op. The latch check happens before the
    /// emission, so the at-most-once guarantee holds under rapid input.
    pub fn press(&mut self, axis: Axis, out_events: &mut Vec<SliderEvent>) {
        if self.interacted[axis.index()] {
            return;
        }
        self.interacted[axis.index()] = true;
        out_events.push(SliderEvent::Interacted {
            axis,
            values: self.values(),
        });
    }

    /// One-way synchronization from an externally controlled value. Clamps
    /// and stores without emitting anything, so prop updates never feed back
    /// into the event surface.
    pub fn sync_value(&mut self, axis: Axis, value: f64) {
        if !value.is_finite() {
            log::warn!("[slider] ignoring non-finite {} sync value {}", axis, value);
            return;
        }
        self.values[axis.index()] = clamp_axis(value);
    }
}

#[inline]
fn clamp_axis(value: f64) -> f64 {
    value.clamp(SLIDER_MIN, SLIDER_MAX)
}
