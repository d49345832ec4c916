//! Damped spring used to settle the detail sheet.
//!
//! The simulation is integrated with fixed 1 ms sub-steps so the result does
//! not depend on the host's frame rate.

use std::time::Duration;

const SUB_STEP: f64 = 0.001;

/// Physical parameters of a spring animation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Stop at the target instead of oscillating past it.
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f64,
    pub rest_speed_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 500.0,
            damping: 80.0,
            mass: 1.0,
            overshoot_clamping: true,
            rest_displacement_threshold: 0.1,
            rest_speed_threshold: 0.1,
        }
    }
}

impl SpringConfig {
    /// Damping ratio; above 1.0 the spring approaches its target without
    /// oscillating.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A one-dimensional spring pulling `position` toward `target`.
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
    settled: bool,
}

impl Spring {
    /// A spring resting at `position`.
    pub fn at_rest(position: f64, config: SpringConfig) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
            target: position,
            settled: true,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Starts moving toward a new target, keeping the current velocity.
    pub fn animate_to(&mut self, target: f64) {
        self.target = target;
        self.settled = false;
        self.settle_if_at_rest();
    }

    /// Teleports to `position` and stops there.
    pub fn jump_to(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.settled = true;
    }

    /// Advances the simulation by `dt`. Returns `true` once the spring has
    /// settled on its target.
    pub fn step(&mut self, dt: Duration) -> bool {
        let mut remaining = dt.as_secs_f64();
        while !self.settled && remaining > 0.0 {
            let h = remaining.min(SUB_STEP);
            remaining -= h;

            let before = self.position - self.target;
            let spring_force = -self.config.stiffness * before;
            let damping_force = -self.config.damping * self.velocity;
            let acceleration = (spring_force + damping_force) / self.config.mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;

            let after = self.position - self.target;
            if self.config.overshoot_clamping && before != 0.0 && before.signum() != after.signum() {
                self.finish();
                break;
            }
            self.settle_if_at_rest();
        }
        self.settled
    }

    fn settle_if_at_rest(&mut self) {
        let displacement = (self.position - self.target).abs();
        if displacement < self.config.rest_displacement_threshold
            && self.velocity.abs() < self.config.rest_speed_threshold
        {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}
