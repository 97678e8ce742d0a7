//! Pointer events as delivered by the gesture collaborator.
//!
//! The collaborator owns tap-versus-pan disambiguation and raw touch
//! sampling; the controller only sees a per-drag translation, optional
//! instantaneous velocity samples, and discrete phase signals.

/// One phase signal of a vertical drag on a registered surface.
///
/// Translation and velocity are positive downward. `time_ms` is any
/// monotonic millisecond clock; it only feeds the release-velocity
/// tracker, so the epoch does not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Finger down, pan recognised.
    Began,
    /// Translation since `Began` changed.
    Moved {
        translation_y: f32,
        velocity_y: Option<f32>,
        time_ms: i64,
    },
    /// Finger lifted; the gesture is over.
    Ended { velocity_y: Option<f32> },
    /// The gesture was taken over or aborted by the platform.
    Cancelled,
}
