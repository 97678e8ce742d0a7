//! Animation support for Slipsheet.
//!
//! Time-based tweens with easing curves, driven by the host's tick
//! instead of an internal clock. Each animated property owns one
//! [`Animatable`] track; starting a new animation on a track supersedes
//! whatever was in flight, which is what keeps rapid re-drags during a
//! settle from running two conflicting animations on the same value.

pub mod animatable;
pub mod easing;

pub use animatable::{Animatable, Lerp, Tick};
pub use easing::Easing;

/// Tween specification: duration plus easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Entrance/exit slide of the sheet box.
    pub fn sheet_slide() -> Self {
        Self::tween(250, Easing::FastOutSlowIn)
    }

    /// Overlay fade, also the gating animation for teardown.
    pub fn overlay_fade() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }

    /// Post-drag settle to a resting height.
    pub fn settle() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}
