// File: crates/scatter-core/src/transition.rs
// Summary: Easing curves, clocks and retargetable animated values.

use std::cell::Cell;
use std::f64::consts::PI;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default length of an axis switch animation.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Time-interpolation curve applied to normalized progress `t` in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadInOut,
    #[default]
    CubicInOut,
    SinInOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadInOut => {
                let t = t * 2.0;
                if t <= 1.0 { t * t / 2.0 } else { ((t - 1.0) * (3.0 - t) + 1.0) / 2.0 }
            }
            Easing::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 { t * t * t / 2.0 } else { ((t - 2.0) * (t - 2.0) * (t - 2.0) + 2.0) / 2.0 }
            }
            Easing::SinInOut => (1.0 - (PI * t).cos()) / 2.0,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(Easing::Linear),
            "quad" | "quad-in-out" => Some(Easing::QuadInOut),
            "cubic" | "cubic-in-out" => Some(Easing::CubicInOut),
            "sin" | "sin-in-out" => Some(Easing::SinInOut),
            _ => None,
        }
    }
}

/// Duration and curve of a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionSpec {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionSpec {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// Jump straight to the target.
    pub const fn immediate() -> Self {
        Self { duration: Duration::ZERO, easing: Easing::Linear }
    }

    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Easing::default())
    }
}

/// Time source driving transitions. `now` is measured from an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Monotonic wall clock.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, at: Duration) {
        self.now.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// One interpolation from `from` to `to` starting at `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub from: f64,
    pub to: f64,
    pub start: Duration,
    pub spec: TransitionSpec,
}

impl Transition {
    pub fn progress(&self, now: Duration) -> f64 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.spec.duration.as_secs_f64()).min(1.0)
    }

    pub fn value_at(&self, now: Duration) -> f64 {
        let k = self.spec.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * k
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// A scalar attribute that may be mid-transition.
///
/// Retargeting starts the new transition from the currently interpolated
/// value, so a newer animation supersedes an older one without a jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatedValue {
    settled: f64,
    active: Option<Transition>,
}

impl AnimatedValue {
    pub const fn new(value: f64) -> Self {
        Self { settled: value, active: None }
    }

    pub fn value_at(&self, now: Duration) -> f64 {
        match &self.active {
            Some(t) => t.value_at(now),
            None => self.settled,
        }
    }

    /// Final value once any running transition completes.
    pub fn target(&self) -> f64 {
        self.active.map(|t| t.to).unwrap_or(self.settled)
    }

    pub fn is_animating(&self, now: Duration) -> bool {
        self.active.map(|t| !t.is_finished(now)).unwrap_or(false)
    }

    /// Animate to `to`; returns true when a timed transition was started.
    pub fn retarget(&mut self, to: f64, now: Duration, spec: TransitionSpec) -> bool {
        if spec.is_immediate() {
            self.settled = to;
            self.active = None;
            return false;
        }
        let from = self.value_at(now);
        self.settled = to;
        self.active = Some(Transition { from, to, start: now, spec });
        true
    }
}
