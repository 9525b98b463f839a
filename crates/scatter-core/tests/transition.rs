// File: crates/scatter-core/tests/transition.rs
// Purpose: Easing endpoints, timed interpolation and retargeting mid-flight.

use std::time::Duration;

use scatter_core::transition::{AnimatedValue, Transition};
use scatter_core::{Clock, Easing, ManualClock, TransitionSpec};

const ALL: [Easing; 4] = [Easing::Linear, Easing::QuadInOut, Easing::CubicInOut, Easing::SinInOut];

#[test]
fn easings_hit_endpoints_and_midpoint() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?}");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?}");
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12, "{e:?}");
        // clamped outside [0, 1]
        assert_eq!(e.apply(-1.0), e.apply(0.0));
        assert_eq!(e.apply(2.0), e.apply(1.0));
    }
}

#[test]
fn default_easing_is_not_linear() {
    let e = Easing::default();
    assert_eq!(e, Easing::CubicInOut);
    assert!(e.apply(0.25) < 0.25);
    assert!(e.apply(0.75) > 0.75);
}

#[test]
fn easing_names() {
    assert_eq!(Easing::from_name("Linear"), Some(Easing::Linear));
    assert_eq!(Easing::from_name("cubic-in-out"), Some(Easing::CubicInOut));
    assert_eq!(Easing::from_name("bounce"), None);
}

#[test]
fn default_transition_is_one_second() {
    let spec = TransitionSpec::default();
    assert_eq!(spec.duration, Duration::from_millis(1000));
    assert!(!spec.is_immediate());
    assert!(TransitionSpec::immediate().is_immediate());
}

#[test]
fn transition_interpolates_over_duration() {
    let t = Transition {
        from: 0.0,
        to: 100.0,
        start: Duration::from_millis(200),
        spec: TransitionSpec::new(Duration::from_millis(1000), Easing::Linear),
    };
    assert_eq!(t.value_at(Duration::ZERO), 0.0);
    assert!((t.value_at(Duration::from_millis(700)) - 50.0).abs() < 1e-9);
    assert_eq!(t.value_at(Duration::from_millis(1200)), 100.0);
    assert!(t.is_finished(Duration::from_millis(1500)));
}

#[test]
fn retarget_starts_from_current_value() {
    let clock = ManualClock::new();
    let linear = TransitionSpec::new(Duration::from_millis(1000), Easing::Linear);
    let mut v = AnimatedValue::new(0.0);

    assert!(v.retarget(100.0, clock.now(), linear));
    clock.advance(Duration::from_millis(250));
    assert!((v.value_at(clock.now()) - 25.0).abs() < 1e-9);

    assert!(v.retarget(-100.0, clock.now(), linear));
    assert!((v.value_at(clock.now()) - 25.0).abs() < 1e-9);
    assert_eq!(v.target(), -100.0);

    clock.advance(Duration::from_millis(500));
    assert!((v.value_at(clock.now()) - (25.0 - 62.5)).abs() < 1e-9);
    clock.advance(Duration::from_millis(500));
    assert_eq!(v.value_at(clock.now()), -100.0);
    assert!(!v.is_animating(clock.now()));
}

#[test]
fn immediate_retarget_snaps() {
    let mut v = AnimatedValue::new(3.0);
    assert!(!v.retarget(7.0, Duration::from_secs(1), TransitionSpec::immediate()));
    assert_eq!(v.value_at(Duration::from_secs(1)), 7.0);
    assert!(!v.is_animating(Duration::from_secs(1)));
}

#[test]
fn manual_clock_clones_share_time() {
    let a = ManualClock::new();
    let b = a.clone();
    a.advance(Duration::from_millis(40));
    assert_eq!(b.now(), Duration::from_millis(40));
    b.set(Duration::from_secs(2));
    assert_eq!(a.now(), Duration::from_secs(2));
}
