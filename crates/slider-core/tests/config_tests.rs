// Host-side tests for the configuration-validation boundary.

use slider_core::{Axis, ConfigError, SliderConfig};

fn config_with(pleasure: Option<f64>, arousal: Option<f64>) -> SliderConfig {
    SliderConfig {
        pleasure_value: pleasure,
        arousal_value: arousal,
        ..Default::default()
    }
}

#[test]
fn absent_controlled_values_validate() {
    assert!(SliderConfig::default().validate().is_ok());
}

#[test]
fn endpoint_and_midpoint_values_validate() {
    for v in [0.0, 0.5, 1.0] {
        assert!(config_with(Some(v), None).validate().is_ok());
        assert!(config_with(None, Some(v)).validate().is_ok());
        assert!(config_with(Some(v), Some(v)).validate().is_ok());
    }
}

#[test]
fn out_of_range_pleasure_is_rejected() {
    assert_eq!(
        config_with(Some(-0.1), None).validate(),
        Err(ConfigError::ValueOutOfRange {
            axis: Axis::Pleasure,
            value: -0.1,
        })
    );
    assert!(config_with(Some(1.1), None).validate().is_err());
}

#[test]
fn out_of_range_arousal_is_rejected() {
    assert_eq!(
        config_with(None, Some(1.1)).validate(),
        Err(ConfigError::ValueOutOfRange {
            axis: Axis::Arousal,
            value: 1.1,
        })
    );
    assert!(config_with(None, Some(-0.1)).validate().is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(config_with(Some(v), None).validate().is_err());
        assert!(config_with(None, Some(v)).validate().is_err());
    }
}

#[test]
fn error_message_names_the_failing_axis() {
    let err = config_with(Some(1.5), None).validate().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("pleasure"));
    assert!(message.contains("1.5"));

    let err = config_with(None, Some(-2.0)).validate().unwrap_err();
    assert!(err.to_string().contains("arousal"));
}

#[test]
fn initial_value_falls_back_to_midpoint() {
    let config = config_with(Some(0.2), None);
    assert_eq!(config.initial_value(Axis::Pleasure), 0.2);
    assert_eq!(config.initial_value(Axis::Arousal), 0.5);
}

#[test]
fn labels_are_absent_by_default() {
    let config = SliderConfig::default();
    assert_eq!(config.labels(Axis::Pleasure), (None, None));
    assert_eq!(config.labels(Axis::Arousal), (None, None));
}

#[test]
fn labels_are_returned_per_axis_and_side() {
    let config = SliderConfig {
        pleasure_left_label: Some("Sad".into()),
        pleasure_right_label: Some("Happy".into()),
        arousal_left_label: Some("Sleepy".into()),
        ..Default::default()
    };
    assert_eq!(
        config.labels(Axis::Pleasure),
        (Some("Sad"), Some("Happy"))
    );
    assert_eq!(config.labels(Axis::Arousal), (Some("Sleepy"), None));
}
