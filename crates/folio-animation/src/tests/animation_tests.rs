use super::*;

const FRAME_NANOS: u64 = 16_666_667;

fn run_to_idle<T: Lerp + Clone>(anim: &mut Animatable<T>, mut on_sample: impl FnMut(T)) -> u64 {
    let mut frame_time = 0u64;
    for _ in 0..600 {
        if !anim.on_frame(frame_time) {
            break;
        }
        on_sample(anim.value());
        frame_time += FRAME_NANOS;
    }
    frame_time
}

#[test]
fn tween_interpolates_and_lands_on_target() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(1.0, AnimationType::default());
    assert!(anim.is_running());

    let mut saw_midpoint = false;
    run_to_idle(&mut anim, |value| {
        if value > 0.0 && value < 1.0 {
            saw_midpoint = true;
        }
    });

    assert!(saw_midpoint, "animation should report intermediate values");
    assert_eq!(anim.value(), 1.0);
    assert!(!anim.is_running());
}

#[test]
fn tween_finishes_after_its_duration() {
    let mut anim = Animatable::new(Point::ZERO);
    anim.animate_to(
        Point::new(100.0, 0.0),
        AnimationType::Tween(AnimationSpec::linear(100)),
    );
    assert!(anim.on_frame(1_000));
    assert!(anim.on_frame(1_000 + 50_000_000));
    assert!((anim.value().x - 50.0).abs() < 0.01);
    assert!(!anim.on_frame(1_000 + 100_000_000));
    assert_eq!(anim.value(), Point::new(100.0, 0.0));
}

#[test]
fn retargeting_continues_from_current_value() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(100.0, AnimationType::Tween(AnimationSpec::linear(100)));
    anim.on_frame(0);
    anim.on_frame(50_000_000);
    let interrupted = anim.value();

    anim.animate_to(0.0, AnimationType::Tween(AnimationSpec::linear(100)));
    anim.on_frame(60_000_000);
    assert_eq!(anim.value(), interrupted, "first frame of a new animation does not jump");
}

#[test]
fn snap_to_cancels_running_animation() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(10.0, AnimationType::default());
    anim.on_frame(0);
    anim.snap_to(3.0);
    assert!(!anim.is_running());
    assert_eq!(anim.value(), 3.0);
    assert!(!anim.on_frame(FRAME_NANOS));
    assert_eq!(anim.value(), 3.0);
}

#[test]
fn stop_freezes_value_in_place() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(10.0, AnimationType::Tween(AnimationSpec::linear(100)));
    anim.on_frame(0);
    anim.on_frame(30_000_000);
    let frozen = anim.value();
    anim.stop();
    assert!(!anim.is_running());
    assert_eq!(anim.value(), frozen);
    assert_eq!(anim.target(), frozen);
}

#[test]
fn delayed_tween_holds_start_value() {
    let mut anim = Animatable::new(0.0f32);
    anim.animate_to(
        1.0,
        AnimationType::Tween(AnimationSpec::linear(100).with_delay(50)),
    );
    anim.on_frame(0);
    assert!(anim.on_frame(40_000_000));
    assert_eq!(anim.value(), 0.0);
}

#[test]
fn spring_settles_on_target() {
    let mut anim = Animatable::new(Point::ZERO);
    anim.animate_to(
        Point::new(0.0, 200.0),
        AnimationType::Spring(SpringSpec::default()),
    );
    run_to_idle(&mut anim, |_| {});
    assert!(!anim.is_running());
    assert_eq!(anim.value(), Point::new(0.0, 200.0));
}

#[test]
fn easing_linear_is_identity() {
    assert_eq!(Easing::LinearEasing.transform(0.0), 0.0);
    assert_eq!(Easing::LinearEasing.transform(0.5), 0.5);
    assert_eq!(Easing::LinearEasing.transform(1.0), 1.0);
}

#[test]
fn easing_bounds_are_correct() {
    let easings = [
        Easing::LinearEasing,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowInEasing,
    ];

    for easing in easings {
        assert!(easing.transform(0.0).abs() < 0.01, "Start should be ~0 for {easing:?}");
        assert!((easing.transform(1.0) - 1.0).abs() < 0.01, "End should be ~1 for {easing:?}");
    }
}

#[test]
fn fast_out_slow_in_is_ahead_of_linear_at_midpoint() {
    assert!(Easing::FastOutSlowInEasing.transform(0.5) > 0.5);
}

#[test]
fn point_lerp_is_componentwise() {
    let a = Point::new(0.0, 10.0);
    let b = Point::new(10.0, 30.0);
    assert_eq!(a.lerp(&b, 0.5), Point::new(5.0, 20.0));
}

#[test]
fn animation_spec_default_has_reasonable_values() {
    let spec = AnimationSpec::default();
    assert_eq!(spec.duration_millis, 300);
    assert_eq!(spec.easing, Easing::FastOutSlowInEasing);
    assert_eq!(spec.delay_millis, 0);
}

#[test]
fn spring_presets_differ_from_default() {
    assert!(SpringSpec::bouncy().damping_ratio < 1.0);
    assert!(SpringSpec::stiff().stiffness > SpringSpec::default().stiffness);
}
