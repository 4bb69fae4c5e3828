// SPDX-License-Identifier: MPL-2.0
//! Timing and spring animation primitives.
//!
//! Animations are pure functions of the instant they are sampled at, so they
//! can be stepped from the application's tick message and tested with fixed
//! instants.

use std::time::{Duration, Instant};

/// Integration step of the spring simulation.
const SPRING_STEP: Duration = Duration::from_millis(1);

/// Longest gap integrated in one call; larger gaps (e.g. a suspended window)
/// are truncated.
const MAX_SPRING_GAP: Duration = Duration::from_secs(1);

/// Below these, a spring is considered at rest and snaps to its target.
const REST_DISPLACEMENT: f32 = 0.001;
const REST_SPEED: f32 = 0.001;

/// Cubic ease-in-out over `t` in `0..=1`.
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Fixed-duration interpolation between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl Tween {
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    /// Linear progress in `0..=1`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let t = self.progress(now);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Physical constants of a damped spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    /// The classic "tension 40, friction 7" spring.
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
        }
    }
}

/// Damped harmonic oscillator pulling a value towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    last: Instant,
    params: SpringParams,
}

impl Spring {
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, params: SpringParams) -> Self {
        Self {
            position: from,
            velocity: 0.0,
            target: to,
            last: start,
            params,
        }
    }

    /// Advances the simulation to `now` and returns the current value.
    pub fn advance(&mut self, now: Instant) -> f32 {
        if self.is_at_rest() {
            self.last = now;
            return self.position;
        }

        if now.saturating_duration_since(self.last) > MAX_SPRING_GAP {
            // Skip the part of a long stall that is not simulated.
            if let Some(resume) = now.checked_sub(MAX_SPRING_GAP) {
                self.last = resume;
            }
        }
        let gap = now.saturating_duration_since(self.last);
        let steps = u32::try_from(gap.as_millis()).unwrap_or(u32::MAX);
        let dt = SPRING_STEP.as_secs_f32();
        let mut simulated = 0;
        for _ in 0..steps {
            simulated += 1;
            let displacement = self.position - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / self.params.mass * dt;
            self.position += self.velocity * dt;

            if self.is_at_rest() {
                break;
            }
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
            self.last = now;
        } else {
            // Carry the unsimulated sub-step remainder into the next frame.
            self.last += SPRING_STEP * simulated;
        }
        self.position
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        (self.position - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
    }

    #[must_use]
    pub fn value(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Motion {
    Timing(Tween),
    Spring(Spring),
}

/// A value that may be driven by a running animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    value: f32,
    motion: Option<Motion>,
}

impl AnimatedValue {
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            motion: None,
        }
    }

    #[must_use]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Jumps to `value`, stopping any running animation.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.motion = None;
    }

    /// Starts a timed animation from the current value to `to`.
    pub fn timing(&mut self, to: f32, duration: Duration, now: Instant) {
        self.motion = Some(Motion::Timing(Tween::new(self.value, to, now, duration)));
    }

    /// Starts a spring animation from the current value to `to`.
    pub fn spring(&mut self, to: f32, now: Instant) {
        self.motion = Some(Motion::Spring(Spring::new(
            self.value,
            to,
            now,
            SpringParams::default(),
        )));
    }

    /// Samples the running animation at `now`.
    ///
    /// Returns `true` when the animation completed during this step.
    pub fn step(&mut self, now: Instant) -> bool {
        let finished = match &mut self.motion {
            None => return false,
            Some(Motion::Timing(tween)) => {
                self.value = tween.value(now);
                tween.is_finished(now)
            }
            Some(Motion::Spring(spring)) => {
                self.value = spring.advance(now);
                spring.is_at_rest()
            }
        };
        if finished {
            self.motion = None;
        }
        finished
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Target of the running animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        match &self.motion {
            Some(Motion::Timing(tween)) => Some(tween.target()),
            Some(Motion::Spring(spring)) => Some(spring.target()),
            None => None,
        }
    }
}
