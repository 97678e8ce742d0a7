//! One animation track per animated property.
//!
//! An [`Animatable`] holds the current value of a property (sheet frame,
//! overlay style) and tweens it toward a target when the host ticks it.
//! There is no internal clock: the start time is captured lazily on the
//! first tick after `animate_to`, so tests drive it with synthetic
//! instants and get fully deterministic output.

use web_time::{Duration, Instant};

use slipsheet_core::{OverlayStyle, SheetFrame};

use crate::AnimationSpec;

/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for SheetFrame {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        SheetFrame {
            box_height: self.box_height.lerp(&target.box_height, fraction),
            bottom_offset: self.bottom_offset.lerp(&target.bottom_offset, fraction),
        }
    }
}

impl Lerp for OverlayStyle {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        OverlayStyle {
            color: slipsheet_core::Color {
                r: self.color.r.lerp(&target.color.r, fraction),
                g: self.color.g.lerp(&target.color.g, fraction),
                b: self.color.b.lerp(&target.color.b, fraction),
                a: self.color.a.lerp(&target.color.a, fraction),
            },
            alpha: self.alpha.lerp(&target.alpha, fraction),
        }
    }
}

/// Outcome of advancing a track by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick<T> {
    /// No animation in flight; nothing to render.
    Idle,
    /// Animation advanced; render this value.
    Running(T),
    /// Animation reached the target this tick; render it exactly once.
    Finished(T),
}

/// A cancellable animation track for a single property.
#[derive(Debug, Clone)]
pub struct Animatable<T: Lerp + Clone> {
    current: T,
    start: T,
    target: T,
    spec: AnimationSpec,
    /// Captured on the first tick after `animate_to`.
    start_time: Option<Instant>,
    running: bool,
}

impl<T: Lerp + Clone> Animatable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            start: initial.clone(),
            target: initial,
            spec: AnimationSpec::default(),
            start_time: None,
            running: false,
        }
    }

    /// The value as of the last tick (or snap).
    pub fn value(&self) -> T {
        self.current.clone()
    }

    pub fn target(&self) -> T {
        self.target.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts a tween from the current value toward `target`, superseding
    /// any in-flight animation on this track.
    pub fn animate_to(&mut self, target: T, spec: AnimationSpec) {
        self.start = self.current.clone();
        self.target = target;
        self.spec = spec;
        self.start_time = None;
        self.running = true;
    }

    /// Jumps to `value` immediately, cancelling any in-flight animation.
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.start = value.clone();
        self.target = value;
        self.start_time = None;
        self.running = false;
    }

    /// Cancels the in-flight animation, leaving the value where the last
    /// tick put it.
    pub fn cancel(&mut self) {
        self.target = self.current.clone();
        self.start = self.current.clone();
        self.start_time = None;
        self.running = false;
    }

    /// Advances the track to `now`.
    pub fn tick(&mut self, now: Instant) -> Tick<T> {
        if !self.running {
            return Tick::Idle;
        }

        let start_time = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_duration_since(start_time);
        let duration = Duration::from_millis(self.spec.duration_ms.max(1));
        let linear = ((elapsed.as_secs_f64() / duration.as_secs_f64()) as f32).clamp(0.0, 1.0);

        if linear >= 1.0 {
            self.current = self.target.clone();
            self.start = self.target.clone();
            self.start_time = None;
            self.running = false;
            return Tick::Finished(self.current.clone());
        }

        let progress = self.spec.easing.transform(linear);
        self.current = self.start.lerp(&self.target, progress);
        Tick::Running(self.current.clone())
    }

    /// When the in-flight animation will finish, once its start time is
    /// known. Usable for `WaitUntil`-style host scheduling; a running
    /// tween still wants a tick per frame for intermediate values.
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.running {
            return None;
        }
        self.start_time
            .map(|start| start + Duration::from_millis(self.spec.duration_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Easing;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn idle_track_does_nothing() {
        let mut track = Animatable::new(1.0f32);
        assert_eq!(track.tick(Instant::now()), Tick::Idle);
        assert_eq!(track.value(), 1.0);
    }

    #[test]
    fn tween_lands_exactly_on_target() {
        let base = Instant::now();
        let mut track = Animatable::new(0.0f32);
        track.animate_to(100.0, AnimationSpec::tween(100, Easing::Linear));

        // First tick captures the start time.
        assert_eq!(track.tick(base), Tick::Running(0.0));
        assert_eq!(track.tick(at(base, 50)), Tick::Running(50.0));
        assert_eq!(track.tick(at(base, 100)), Tick::Finished(100.0));
        // Exactly one Finished; afterwards the track is idle.
        assert_eq!(track.tick(at(base, 150)), Tick::Idle);
        assert_eq!(track.value(), 100.0);
    }

    #[test]
    fn restart_supersedes_from_current_value() {
        let base = Instant::now();
        let mut track = Animatable::new(0.0f32);
        track.animate_to(100.0, AnimationSpec::tween(100, Easing::Linear));
        track.tick(base);
        track.tick(at(base, 50));
        assert_eq!(track.value(), 50.0);

        // Retarget mid-flight: the new tween starts from 50.
        track.animate_to(0.0, AnimationSpec::tween(100, Easing::Linear));
        assert_eq!(track.tick(at(base, 60)), Tick::Running(50.0));
        assert_eq!(track.tick(at(base, 110)), Tick::Running(25.0));
        assert_eq!(track.tick(at(base, 160)), Tick::Finished(0.0));
    }

    #[test]
    fn cancel_freezes_the_value() {
        let base = Instant::now();
        let mut track = Animatable::new(0.0f32);
        track.animate_to(100.0, AnimationSpec::tween(100, Easing::Linear));
        track.tick(base);
        track.tick(at(base, 30));
        track.cancel();
        assert!(!track.is_running());
        assert_eq!(track.value(), 30.0);
        assert_eq!(track.tick(at(base, 90)), Tick::Idle);
    }

    #[test]
    fn snap_jumps_and_cancels() {
        let base = Instant::now();
        let mut track = Animatable::new(0.0f32);
        track.animate_to(100.0, AnimationSpec::tween(100, Easing::Linear));
        track.tick(base);
        track.snap_to(7.0);
        assert_eq!(track.value(), 7.0);
        assert_eq!(track.tick(at(base, 200)), Tick::Idle);
    }

    #[test]
    fn frame_lerp_tweens_height_and_offset_together() {
        let from = SheetFrame {
            box_height: 300.0,
            bottom_offset: 300.0,
        };
        let to = SheetFrame {
            box_height: 300.0,
            bottom_offset: 0.0,
        };
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.box_height, 300.0);
        assert_eq!(mid.bottom_offset, 150.0);
    }

    #[test]
    fn deadline_known_after_first_tick() {
        let base = Instant::now();
        let mut track = Animatable::new(0.0f32);
        track.animate_to(1.0, AnimationSpec::tween(250, Easing::Linear));
        assert_eq!(track.next_deadline(), None);
        track.tick(base);
        assert_eq!(track.next_deadline(), Some(at(base, 250)));
    }
}
