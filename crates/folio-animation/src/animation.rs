//! Time-based animation values with easing curves and spring physics.

use folio_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(
            self.x.lerp(&target.x, fraction),
            self.y.lerp(&target.y, fraction),
        )
    }
}

/// Easing curves, named after their Material counterparts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    LinearEasing,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowInEasing,
    LinearOutSlowInEasing,
    FastOutLinearEasing,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::LinearEasing => fraction,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowInEasing => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::LinearOutSlowInEasing => cubic_bezier(0.0, 0.0, 0.2, 1.0, fraction),
            Easing::FastOutLinearEasing => cubic_bezier(0.4, 0.0, 1.0, 1.0, fraction),
        }
    }
}

/// Evaluates the CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1)
/// at horizontal position `fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let slope = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson on x(t) = fraction, bisection if the slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            return sample(ay, by, cy, t);
        }
        let dx = slope(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = fraction;
    for _ in 0..16 {
        let delta = sample(ax, bx, cx, t) - fraction;
        if delta.abs() < 1e-6 {
            break;
        }
        if delta > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample(ay, by, cy, t)
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::LinearEasing)
    }

    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowInEasing)
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 = critically damped, < 1.0 bounces, > 1.0 creeps.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Progress velocity (fractions/s) under which the spring may rest.
    pub velocity_threshold: f32,
    /// Progress distance from the target under which the spring may rest.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// A value that moves toward a target one frame at a time.
///
/// Unlike a self-scheduling animation, nothing happens until the owner calls
/// [`Animatable::on_frame`]. Starting a new animation or snapping cancels the
/// one in flight and continues from wherever the value currently is.
#[derive(Debug, Clone)]
pub struct Animatable<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    animation_type: AnimationType,
    start_time_nanos: Option<u64>,
    running: bool,
    /// Spring state, measured in start→target progress units.
    progress: f32,
    velocity: f32,
}

impl<T: Lerp + Clone> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            animation_type: AnimationType::default(),
            start_time_nanos: None,
            running: false,
            progress: 0.0,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn animation_type(&self) -> AnimationType {
        self.animation_type
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts animating from the current value toward `target`, replacing any
    /// animation in flight. The clock starts at the next `on_frame`.
    pub fn animate_to(&mut self, target: T, animation: AnimationType) {
        self.start = self.current.clone();
        self.target = target;
        self.animation_type = animation;
        self.start_time_nanos = None;
        self.progress = 0.0;
        self.velocity = 0.0;
        self.running = true;
    }

    /// Jumps to `target` immediately, cancelling any animation in flight.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.settle();
    }

    /// Cancels the animation in flight, leaving the value where it is.
    pub fn stop(&mut self) {
        self.start = self.current.clone();
        self.target = self.current.clone();
        self.settle();
    }

    /// Advances the animation to `frame_time_nanos`. Returns `true` while the
    /// animation needs more frames.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.running {
            return false;
        }
        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);

        match self.animation_type {
            AnimationType::Tween(spec) => {
                let delay_nanos = spec.delay_millis * 1_000_000;
                if elapsed_nanos < delay_nanos {
                    return true;
                }
                let duration_nanos = (spec.duration_millis * 1_000_000).max(1);
                let linear_progress = ((elapsed_nanos - delay_nanos) as f64
                    / duration_nanos as f64)
                    .clamp(0.0, 1.0) as f32;
                if linear_progress >= 1.0 {
                    self.finish();
                    return false;
                }
                let progress = spec.easing.transform(linear_progress);
                self.current = self.start.lerp(&self.target, progress);
                true
            }
            AnimationType::Spring(spec) => {
                let dt = elapsed_nanos as f32 / 1_000_000_000.0;
                if dt == 0.0 {
                    return true;
                }
                self.step_spring(spec, dt);
                // The spring integrates from its own start time; rebase so the
                // next frame only simulates the new interval.
                self.start_time_nanos = Some(frame_time_nanos);

                let at_rest = self.velocity.abs() < spec.velocity_threshold;
                let near_target = (self.progress - 1.0).abs() < spec.position_threshold;
                if at_rest && near_target {
                    self.finish();
                    return false;
                }
                self.current = self.start.lerp(&self.target, self.progress.clamp(0.0, 2.0));
                true
            }
        }
    }

    fn step_spring(&mut self, spec: SpringSpec, dt: f32) {
        // Semi-implicit Euler at a fixed ~60fps sub-step for stability.
        const TIMESTEP: f32 = 0.016;
        let damping = 2.0 * spec.damping_ratio * spec.stiffness.sqrt();
        let mut simulated = 0.0f32;
        while simulated < dt {
            let step = TIMESTEP.min(dt - simulated);
            let displacement = self.progress - 1.0;
            let force = -spec.stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress += self.velocity * step;
            simulated += step;
        }
    }

    fn finish(&mut self) {
        self.current = self.target.clone();
        self.start = self.target.clone();
        self.settle();
    }

    fn settle(&mut self) {
        self.start_time_nanos = None;
        self.running = false;
        self.progress = 0.0;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
