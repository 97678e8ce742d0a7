//! The drag/height state machine.
//!
//! Two states: `Idle` (no open session, live height is the last settled
//! value) and `Dragging` (a session is open and owns the baseline).
//! The engine never drives animation; `end_drag` returns a pure settle
//! decision for the controller to act on.

use log::debug;

use crate::config::Config;
use crate::frame::SheetFrame;

/// What to do after a drag ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleDecision {
    /// Run the dismissal sequence.
    Dismiss,
    /// Animate to this height and record it as the new resting height.
    SettleAt(f32),
}

/// Ephemeral per-gesture state, created at drag-begin and destroyed at
/// drag-end/cancel. Owned exclusively by the engine.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Live height in effect when the drag began.
    baseline: f32,
    /// Raw (pre-mapping) candidate height from the latest update.
    last_candidate: f32,
    /// Most recent velocity sample, if the pointer collaborator
    /// delivered one. Positive = moving downward (shrinking).
    last_velocity: Option<f32>,
}

/// Owns the sheet's live height and interprets drag deltas against the
/// configuration.
#[derive(Debug)]
pub struct DragHeightEngine {
    config: Config,
    /// Swap requested while a session was open; applied when it closes so
    /// one gesture is judged by one configuration.
    pending_config: Option<Config>,
    /// Last settled height. The live height while `Idle`.
    resting_height: f32,
    session: Option<DragSession>,
}

impl DragHeightEngine {
    pub fn new(config: Config) -> Self {
        let resting_height = config.default_height;
        Self {
            config,
            pending_config: None,
            resting_height,
            session: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn resting_height(&self) -> f32 {
        self.resting_height
    }

    /// The frame for the current live height: the last update's candidate
    /// while dragging, the resting height otherwise.
    pub fn current_frame(&self) -> SheetFrame {
        let height = match &self.session {
            Some(session) => session.last_candidate,
            None => self.resting_height,
        };
        SheetFrame::map(height, &self.config)
    }

    /// Replaces the configuration. Height thresholds take effect on the
    /// next drag/settle cycle; a swap arriving mid-session is deferred
    /// until that session closes.
    pub fn set_config(&mut self, config: Config) {
        if self.session.is_some() {
            debug!("engine: config swap deferred until the open drag session ends");
            self.pending_config = Some(config);
        } else {
            self.config = config;
        }
    }

    /// Opens a drag session, snapshotting the current live height as the
    /// baseline. Calling while already dragging keeps the open session.
    pub fn begin_drag(&mut self) {
        if self.session.is_some() {
            debug!("engine: begin_drag while dragging, keeping open session");
            return;
        }
        self.session = Some(DragSession {
            baseline: self.resting_height,
            last_candidate: self.resting_height,
            last_velocity: None,
        });
    }

    /// Applies a translation update and returns the frame to render live.
    ///
    /// Dragging upward (negative `delta_y`) increases the candidate
    /// height. Pure in `(baseline, delta_y, config)`; there is no hidden
    /// accumulation, so it is callable at arbitrary frequency. A call
    /// while `Idle` is a no-op returning the current frame.
    pub fn update_drag(&mut self, delta_y: f32, velocity_y: Option<f32>) -> SheetFrame {
        let Some(session) = self.session.as_mut() else {
            debug!("engine: update_drag while idle ignored");
            return self.current_frame();
        };
        session.last_candidate = session.baseline - delta_y;
        if velocity_y.is_some() {
            session.last_velocity = velocity_y;
        }
        SheetFrame::map(session.last_candidate, &self.config)
    }

    /// Closes the session and returns the settle decision for the raw
    /// candidate height and release velocity. `None` only when no session
    /// was open (redundant lifecycle call).
    pub fn end_drag(&mut self, velocity_y: Option<f32>) -> Option<SettleDecision> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                debug!("engine: end_drag while idle ignored");
                return None;
            }
        };
        let velocity = velocity_y.or(session.last_velocity);
        let decision = decide(session.last_candidate, velocity, &self.config);
        debug!(
            "engine: drag ended at raw {:.1} (v {:?}) -> {:?}",
            session.last_candidate, velocity, decision
        );
        self.apply_pending_config();
        Some(decision)
    }

    /// Aborts the session without a settle decision; the live height
    /// reverts to the baseline regardless of drag travel.
    pub fn cancel_drag(&mut self) -> SheetFrame {
        if let Some(session) = self.session.take() {
            self.resting_height = session.baseline;
            self.apply_pending_config();
        } else {
            debug!("engine: cancel_drag while idle ignored");
        }
        self.current_frame()
    }

    /// Records the height a settle animation is heading to. The resting
    /// height updates at decision time, so a re-drag that begins
    /// mid-animation baselines at the settle target.
    pub fn settle(&mut self, height: f32) {
        self.resting_height = height;
    }

    fn apply_pending_config(&mut self) {
        if let Some(config) = self.pending_config.take() {
            self.config = config;
        }
    }
}

/// The settle decision: a pure function of the raw candidate height, the
/// signed release velocity (positive = downward), and the configuration.
///
/// The sheet is a two-stop surface (default / maximum) plus dismissal;
/// velocity only breaks ties between the stops, it cannot fling to an
/// arbitrary height and it cannot override a below-threshold release.
pub fn decide(raw_height: f32, velocity_y: Option<f32>, config: &Config) -> SettleDecision {
    let clearly_up = velocity_y.is_some_and(|v| v < 0.0);
    let clearly_down = velocity_y.is_some_and(|v| v > 0.0);

    if raw_height < config.dismissed_height {
        SettleDecision::Dismiss
    } else if raw_height < config.default_height {
        SettleDecision::SettleAt(config.default_height)
    } else if raw_height < config.maximum_height && !clearly_up {
        SettleDecision::SettleAt(config.default_height)
    } else if raw_height > config.default_height && !clearly_down {
        SettleDecision::SettleAt(config.maximum_height)
    } else {
        // Boundary release with a contradicting velocity: fall back to
        // the nearest stop so the sheet never ends a gesture unsettled.
        let to_default = (raw_height - config.default_height).abs();
        let to_maximum = (raw_height - config.maximum_height).abs();
        if to_default <= to_maximum {
            SettleDecision::SettleAt(config.default_height)
        } else {
            SettleDecision::SettleAt(config.maximum_height)
        }
    }
}
