//! Release-velocity estimation for drag gestures.
//!
//! Impulse-strategy 1D tracker over the drag's vertical translation.
//! Velocity is computed from the kinetic energy the recent samples would
//! have imparted, which is robust against jittery pointer delivery. Used
//! by the controller as a fallback when the pointer collaborator does not
//! supply an instantaneous velocity at release.

/// Ring buffer size for translation samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within this window before the newest one contribute.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped moving.
const ASSUME_STOPPED_MS: i64 = 40;

/// Cap on the reported velocity, in logical px/sec. Matches a typical
/// platform maximum fling velocity.
pub const MAX_TRACKED_VELOCITY: f32 = 8_000.0;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    translation: f32,
}

/// Tracks the vertical translation of one drag and estimates its
/// instantaneous velocity in px/sec (positive = downward).
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the drag translation at the given timestamp.
    pub fn add_sample(&mut self, time_ms: i64, translation: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample {
            time_ms,
            translation,
        });
    }

    /// Estimated velocity in px/sec, capped to [`MAX_TRACKED_VELOCITY`].
    ///
    /// Returns `0.0` when fewer than two usable samples exist or the
    /// pointer had stopped before release.
    pub fn velocity(&self) -> f32 {
        let raw = self.raw_velocity();
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(-MAX_TRACKED_VELOCITY, MAX_TRACKED_VELOCITY)
    }

    /// Discards all samples. Called at drag-begin.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    fn raw_velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[current] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (sample.time_ms - previous.time_ms).abs() as f32;
            previous = newest;

            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.translation;
            times[count] = -age;

            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };

            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, count) * 1000.0
    }
}

/// Impulse-strategy velocity in units/ms: accumulate the work each
/// inter-sample segment contributes, then convert the kinetic energy back
/// to a signed velocity.
fn impulse_velocity(positions: &[f32; HISTORY_SIZE], times: &[f32; HISTORY_SIZE], count: usize) -> f32 {
    let mut work = 0.0f32;
    let start = count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = ½mv² with unit mass, keeping the sign of the accumulated work.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
