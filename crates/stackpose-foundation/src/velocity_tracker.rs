//! Pointer velocity estimation for release/fling handling.
//!
//! Samples are pointer positions along the scroll axis with host timestamps.
//! Velocity is recovered with a recency-weighted least-squares fit over a
//! short trailing window, which tracks the actual finger speed instead of
//! amplifying the last couple of deltas.

/// Samples older than this relative to the newest one are discarded.
const HORIZON_MS: i64 = 100;

/// Upper bound on retained samples; drags produce one sample per move event.
const SAMPLE_CAPACITY: usize = 20;

/// If the pointer covered less than this many pixels over `STOP_WINDOW_MS`,
/// it is considered stopped and the reported velocity is zero.
const STOP_MOVEMENT_PX: f32 = 2.0;
const STOP_WINDOW_MS: i64 = 40;

/// Per-sample weight decay, newest to oldest.
const RECENCY_DECAY: f32 = 0.95;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    value: f32,
}

/// One-dimensional velocity tracker.
///
/// ```
/// # use stackpose_foundation::VelocityTracker;
/// let mut tracker = VelocityTracker::new();
/// tracker.add_sample(0, 0.0);
/// tracker.add_sample(16, 8.0);
/// tracker.add_sample(32, 16.0);
/// assert!(tracker.velocity() > 0.0); // px/s
/// ```
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: Vec<Sample>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: Vec::with_capacity(SAMPLE_CAPACITY),
        }
    }

    /// Records a position sample. Samples that have fallen out of the
    /// horizon window are pruned eagerly so the buffer stays small.
    pub fn add_sample(&mut self, time_ms: i64, value: f32) {
        self.samples.push(Sample { time_ms, value });
        self.samples
            .retain(|sample| time_ms - sample.time_ms <= HORIZON_MS);
        if self.samples.len() > SAMPLE_CAPACITY {
            let excess = self.samples.len() - SAMPLE_CAPACITY;
            self.samples.drain(..excess);
        }
    }

    /// Discards all recorded samples.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Current velocity estimate in units per second.
    ///
    /// Returns 0.0 with fewer than two usable samples, or when the pointer
    /// has effectively stopped moving.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples.last() else {
            return 0.0;
        };

        // Only samples inside the horizon participate. add_sample prunes on
        // insert, but the newest sample may have aged the window further.
        let window: Vec<Sample> = self
            .samples
            .iter()
            .copied()
            .filter(|sample| newest.time_ms - sample.time_ms <= HORIZON_MS)
            .collect();

        if window.len() < 2 {
            return 0.0;
        }

        let oldest = window[0];
        let span_ms = (newest.time_ms - oldest.time_ms) as f32;
        let travel = (newest.value - oldest.value).abs();
        if span_ms > STOP_WINDOW_MS as f32 && travel < STOP_MOVEMENT_PX {
            return 0.0;
        }

        weighted_slope(&window, newest.time_ms) * 1000.0
    }
}

/// Recency-weighted linear regression of value over time.
///
/// Times are expressed as negative ages in milliseconds relative to the
/// newest sample; the fitted slope is the velocity in units/ms.
fn weighted_slope(window: &[Sample], newest_ms: i64) -> f32 {
    let mut sum_w = 0.0f32;
    let mut sum_t = 0.0f32;
    let mut sum_x = 0.0f32;
    let mut sum_tt = 0.0f32;
    let mut sum_tx = 0.0f32;

    for (i, sample) in window.iter().rev().enumerate() {
        let weight = RECENCY_DECAY.powi(i as i32);
        let t = -((newest_ms - sample.time_ms) as f32);
        let x = sample.value;

        sum_w += weight;
        sum_t += weight * t;
        sum_x += weight * x;
        sum_tt += weight * t * t;
        sum_tx += weight * t * x;
    }

    let denom = sum_w * sum_tt - sum_t * sum_t;
    if denom.abs() < f32::EPSILON {
        return 0.0;
    }
    (sum_w * sum_tx - sum_t * sum_x) / denom
}
