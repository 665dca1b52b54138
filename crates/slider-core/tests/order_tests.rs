// Host-side tests for presentation-order selection.

use rand::rngs::StdRng;
use rand::SeedableRng;
use slider_core::{Axis, PresentationOrder};

#[test]
fn fixed_order_is_pleasure_then_arousal() {
    assert_eq!(
        PresentationOrder::fixed().axes(),
        [Axis::Pleasure, Axis::Arousal]
    );
    assert_eq!(PresentationOrder::default(), PresentationOrder::fixed());
}

#[test]
fn draw_is_ignored_when_randomization_is_off() {
    for draw in [0.0, 0.3, 0.49, 0.7, 0.999] {
        assert_eq!(
            PresentationOrder::from_draw(false, draw),
            PresentationOrder::fixed()
        );
    }
}

#[test]
fn draws_on_opposite_sides_of_the_threshold_differ() {
    let low = PresentationOrder::from_draw(true, 0.3);
    let high = PresentationOrder::from_draw(true, 0.7);
    assert_ne!(low, high);
    assert_eq!(high, PresentationOrder::fixed());
    assert_eq!(low.axes(), [Axis::Arousal, Axis::Pleasure]);
}

#[test]
fn any_order_contains_both_axes_exactly_once() {
    for draw in [0.1, 0.9] {
        let axes = PresentationOrder::from_draw(true, draw).axes();
        assert!(axes.contains(&Axis::Pleasure));
        assert!(axes.contains(&Axis::Arousal));
    }
}

#[test]
fn seeded_draws_reach_both_orders() {
    let mut fixed_seen = false;
    let mut swapped_seen = false;
    for seed in 0..64u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        if PresentationOrder::randomized(&mut rng) == PresentationOrder::fixed() {
            fixed_seen = true;
        } else {
            swapped_seen = true;
        }
    }
    assert!(fixed_seen && swapped_seen);
}
