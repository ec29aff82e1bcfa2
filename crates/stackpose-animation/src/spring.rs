//! Damped spring used to settle the stack after a release.

/// Spring tuning parameters.
///
/// The model is the classic `accel = tension * displacement - friction *
/// velocity` oscillator. The defaults give a heavily damped return with no
/// visible bounce, matching the feel of a list snapping back from
/// overscroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub tension: f32,
    pub friction: f32,
    /// Displacement below which the spring may come to rest.
    pub rest_displacement: f32,
    /// Speed below which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            tension: 40.0,
            friction: 20.0,
            rest_displacement: 0.001,
            rest_speed: 0.001,
        }
    }
}

/// Integration slice ceiling. Large frame gaps (a dropped frame, a paused
/// tab) are integrated in fixed slices so the result stays independent of
/// frame cadence.
const MAX_STEP_S: f32 = 1.0 / 60.0;

/// A scalar spring animating toward a fixed target.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    done: bool,
}

impl Spring {
    pub fn new(from: f32, target: f32) -> Self {
        Self::with_config(from, target, SpringConfig::default())
    }

    pub fn with_config(from: f32, target: f32, config: SpringConfig) -> Self {
        Self {
            value: from,
            velocity: 0.0,
            target,
            config,
            done: false,
        }
    }

    /// Seeds the spring with an initial velocity, e.g. the release velocity
    /// reported by a velocity tracker.
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring has come to rest at its target.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances the spring by `dt` seconds and returns the new value.
    ///
    /// Once at rest the value is pinned exactly to the target and further
    /// steps are no-ops.
    pub fn step(&mut self, dt: f32) -> f32 {
        if self.done || dt <= 0.0 {
            return self.value;
        }

        let mut remaining = dt;
        while remaining > 0.0 && !self.done {
            let slice = remaining.min(MAX_STEP_S);
            remaining -= slice;

            // Semi-implicit Euler: update velocity first, then position.
            let displacement = self.target - self.value;
            let accel = self.config.tension * displacement - self.config.friction * self.velocity;
            self.velocity += accel * slice;
            self.value += self.velocity * slice;

            if (self.target - self.value).abs() < self.config.rest_displacement
                && self.velocity.abs() < self.config.rest_speed
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.done = true;
            }
        }

        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pumps 60 fps frames until the spring rests, up to `max_frames`.
    fn run_to_rest(spring: &mut Spring, max_frames: usize) -> usize {
        for frame in 0..max_frames {
            if spring.is_done() {
                return frame;
            }
            spring.step(1.0 / 60.0);
        }
        max_frames
    }

    #[test]
    fn spring_converges_to_target() {
        let mut spring = Spring::new(-120.0, 0.0);
        let frames = run_to_rest(&mut spring, 600);
        assert!(spring.is_done(), "spring never settled");
        assert_eq!(spring.value(), 0.0);
        assert!(frames < 600);
    }

    #[test]
    fn default_config_does_not_overshoot() {
        // friction² > 4·tension: overdamped, so the approach is monotone.
        let mut spring = Spring::new(100.0, 0.0);
        let mut previous = spring.value();
        while !spring.is_done() {
            let value = spring.step(1.0 / 60.0);
            assert!(value <= previous + 1e-3, "overshoot: {previous} -> {value}");
            assert!(value >= -1e-3, "crossed the target: {value}");
            previous = value;
        }
    }

    #[test]
    fn resting_spring_ignores_further_steps() {
        let mut spring = Spring::new(10.0, 0.0);
        run_to_rest(&mut spring, 600);
        let settled = spring.value();
        assert_eq!(spring.step(1.0 / 60.0), settled);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let mut spring = Spring::new(50.0, 0.0);
        assert_eq!(spring.step(0.0), 50.0);
        assert_eq!(spring.step(-1.0), 50.0);
    }

    #[test]
    fn large_frame_gap_matches_small_steps() {
        let mut coarse = Spring::new(80.0, 0.0);
        let mut fine = Spring::new(80.0, 0.0);
        coarse.step(0.5);
        for _ in 0..30 {
            fine.step(1.0 / 60.0);
        }
        assert!((coarse.value() - fine.value()).abs() < 1e-3);
    }

    #[test]
    fn release_velocity_carries_into_the_spring() {
        let mut thrown = Spring::new(0.0, 0.0).with_velocity(500.0);
        thrown.step(1.0 / 60.0);
        assert!(thrown.value() > 0.0, "initial velocity had no effect");
    }
}
