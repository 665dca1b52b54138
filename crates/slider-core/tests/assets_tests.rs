// Host-side tests for asset URL resolution.

use slider_core::{assets, Axis};

#[test]
fn pleasure_images_resolve_under_the_configured_prefix() {
    let images = assets::AxisImages::for_axis("/images/", Axis::Pleasure);
    assert_eq!(images.left, "/images/AS_unhappy.png");
    assert_eq!(images.right, "/images/AS_happy.png");
}

#[test]
fn arousal_images_resolve_under_the_configured_prefix() {
    let images = assets::AxisImages::for_axis("/images/", Axis::Arousal);
    assert_eq!(images.left, "/images/AS_sleepy.png");
    assert_eq!(images.right, "/images/AS_wideawake.png");
}

#[test]
fn intensity_cue_resolves_under_the_configured_prefix() {
    assert_eq!(
        assets::intensity_cue("/custom/"),
        "/custom/AS_intensity_cue.png"
    );
}

#[test]
fn empty_prefix_leaves_bare_filenames() {
    let images = assets::AxisImages::for_axis("", Axis::Pleasure);
    assert_eq!(images.left, "AS_unhappy.png");
    assert_eq!(assets::intensity_cue(""), "AS_intensity_cue.png");
}

#[test]
fn prefix_is_prepended_verbatim() {
    // No separator is inserted; the caller controls the trailing slash.
    assert_eq!(
        assets::resolve("https://cdn.example.org/as/", "AS_happy.png"),
        "https://cdn.example.org/as/AS_happy.png"
    );
    assert_eq!(assets::resolve("img-", "AS_happy.png"), "img-AS_happy.png");
}
