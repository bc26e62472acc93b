use vizij_odometer_core::{ComputationError, Config, CurrentPosition, Odometer, RawValue};

fn values(from: f64, to: f64) -> (RawValue, RawValue) {
    (RawValue::from(from), RawValue::from(to))
}

#[test]
fn unchanged_values_are_not_recomputed() {
    let mut odo = Odometer::new(Config::default());
    let (a, b) = values(5.0, 9.0);
    assert!(odo.set_values(Some(&a), Some(&b)));
    assert!(!odo.set_values(Some(&a), Some(&b)));
    // text that normalizes to the same numbers counts as unchanged
    assert!(!odo.set_values(Some(&RawValue::from("5")), Some(&RawValue::from("9"))));
    assert!(odo.set_values(Some(&a), Some(&RawValue::from(10.0))));
    assert_eq!(odo.plan().unwrap().to_value, Some(10.0));
}

#[test]
fn failed_computation_renders_nothing() {
    let mut odo = Odometer::new(Config::default());
    let (a, b) = values(5.0, 9.0);
    odo.set_values(Some(&a), Some(&b));
    assert!(odo.plan().is_some());

    assert!(odo.set_values(Some(&RawValue::from(-3.0)), Some(&b)));
    assert!(odo.plan().is_none());
    assert!(matches!(
        odo.error(),
        Some(ComputationError::InvalidValue { .. })
    ));
    let frame = odo.frame(CurrentPosition::From);
    assert!(frame.digits.is_empty());
    assert!(frame.overlay.is_none());
    assert!(frame.label.is_none());

    // recovers once a valid value arrives
    assert!(odo.set_values(Some(&a), Some(&b)));
    assert!(odo.error().is_none());
}

#[test]
fn offsets_apply_only_while_the_greater_value_shows() {
    let mut odo = Odometer::new(Config::default());
    let (a, b) = values(5.0, 9.0);
    odo.set_values(Some(&a), Some(&b));

    let first = odo.frame(CurrentPosition::From);
    assert_eq!(first.label.as_deref(), Some("5"));
    assert_eq!(first.digits[0].transform, None);
    assert_eq!(first.digits[0].frame_class_names, vec!["digit-frame"]);

    let second = odo.frame(CurrentPosition::To);
    assert_eq!(second.label.as_deref(), Some("9"));
    assert_eq!(
        second.digits[0].transform.as_deref(),
        Some("translate3d(0, -40%, 0)")
    );
}

#[test]
fn descending_values_start_on_the_offset() {
    let mut odo = Odometer::new(Config::default());
    let (a, b) = values(9.0, 5.0);
    odo.set_values(Some(&a), Some(&b));
    // 9 is the greater value and shows first
    let first = odo.frame(CurrentPosition::From);
    assert_eq!(first.label.as_deref(), Some("9"));
    assert_eq!(
        first.digits[0].transform.as_deref(),
        Some("translate3d(0, -40%, 0)")
    );
    assert_eq!(odo.frame(CurrentPosition::To).digits[0].transform, None);
}

#[test]
fn reversed_strips_rest_on_their_last_unit() {
    let mut odo = Odometer::new(Config {
        flow_reverse: true,
        ..Config::default()
    });
    let (a, b) = values(1.5, 2.0);
    odo.set_values(Some(&a), Some(&b));
    let frame = odo.frame(CurrentPosition::From);

    assert_eq!(
        frame.digits[0].frame_class_names,
        vec!["digit-frame", "digit-frame--reverse"]
    );
    assert_eq!(
        frame.digits[0].transform.as_deref(),
        Some("translate3d(0, -90%, 0)")
    );
    // decimal point never moves
    assert_eq!(frame.digits[1].transform, None);
    assert_eq!(
        frame.digits[1].reel_class_names,
        vec!["digit-reel", "digit-reel--dot"]
    );
    // six-unit strip rests at 100 - 10/6
    assert_eq!(
        frame.digits[3].transform.as_deref(),
        Some("translate3d(0, -98.33333333333333%, 0)")
    );
}

#[test]
fn reel_classes_carry_padding_and_delay_tags() {
    let mut odo = Odometer::new(Config::default());
    let (a, b) = values(199.0, 1000.0);
    odo.set_values(Some(&a), Some(&b));
    let frame = odo.frame(CurrentPosition::From);
    assert_eq!(
        frame.digits[0].reel_class_names,
        vec!["digit-reel", "digit-reel--leading-zero"]
    );
    assert_eq!(frame.digits[1].reel_class_names, vec!["digit-reel"]);
    assert_eq!(
        frame.digits[3].reel_class_names,
        vec!["digit-reel", "digit-reel--delay-1"]
    );
}

#[test]
fn overlay_follows_fade_settings() {
    let mut odo = Odometer::new(Config {
        fade_color: "#101010".into(),
        ..Config::default()
    });
    odo.set_values(Some(&RawValue::from(3.0)), None);
    let overlay = odo.frame(CurrentPosition::To).overlay.unwrap();
    assert_eq!(overlay.label, "3");
    assert_eq!(
        overlay.class_names,
        vec!["digit-secret", "digit-secret--faded-border"]
    );
    assert_eq!(overlay.color.as_deref(), Some("#101010"));

    odo.set_config(Config {
        faded_border: false,
        fade_color: "#101010".into(),
        ..Config::default()
    });
    let overlay = odo.frame(CurrentPosition::From).overlay.unwrap();
    assert_eq!(overlay.class_names, vec!["digit-secret"]);
    assert_eq!(overlay.color, None);
}

#[test]
fn config_and_position_deserialize_with_defaults() {
    let cfg: Config = serde_json::from_str(r#"{ "flow_reverse": true }"#).unwrap();
    assert!(cfg.flow_reverse);
    assert!(cfg.faded_border);
    assert_eq!(cfg.fade_color, "");

    let pos: CurrentPosition = serde_json::from_str("1").unwrap();
    assert_eq!(pos, CurrentPosition::To);
    assert!(serde_json::from_str::<CurrentPosition>("2").is_err());
}

#[test]
fn direction_change_replans_before_the_next_frame() {
    let (a, b) = values(19.0, 21.0);
    let mut odo = Odometer::new(Config::default());
    odo.set_values(Some(&a), Some(&b));

    let reversed = Config {
        flow_reverse: true,
        ..Config::default()
    };
    odo.set_config(reversed.clone());
    let mut fresh = Odometer::new(reversed);
    fresh.set_values(Some(&a), Some(&b));

    for position in [CurrentPosition::From, CurrentPosition::To] {
        assert_eq!(odo.frame(position), fresh.frame(position));
    }
    assert_eq!(odo.frame(CurrentPosition::From).digits[0].strip_text, "0987654321");
    // the replanned inputs count as current
    assert!(!odo.set_values(Some(&a), Some(&b)));

    odo.set_config(Config::default());
    assert_eq!(odo.frame(CurrentPosition::From).digits[0].strip_text, "1234567890");
}

#[test]
fn direction_change_keeps_a_failed_computation() {
    let mut odo = Odometer::new(Config::default());
    odo.set_values(Some(&RawValue::from("n/a")), None);
    odo.set_config(Config {
        flow_reverse: true,
        ..Config::default()
    });
    assert!(odo.plan().is_none());
    assert!(odo.error().is_some());
    assert!(odo.frame(CurrentPosition::From).digits.is_empty());
}

#[test]
fn invalid_to_value_is_cached_like_a_missing_one() {
    let mut odo = Odometer::new(Config::default());
    let from = RawValue::from(4.0);
    let bad = RawValue::from("oops");
    assert!(odo.set_values(Some(&from), Some(&bad)));
    assert_eq!(odo.plan().unwrap().to_value, None);
    assert!(!odo.set_values(Some(&from), Some(&bad)));
    assert!(odo.set_values(Some(&from), Some(&RawValue::from(6.0))));
}
