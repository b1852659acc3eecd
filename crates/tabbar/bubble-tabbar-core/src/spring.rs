//! Damped spring integrator driving a single scalar toward a target.
//!
//! F = -stiffness × (position - target) - damping × velocity, integrated with semi-implicit
//! Euler. Large frame deltas are split into equal sub-steps of at most `max_step` seconds, and
//! one call integrates at most `MAX_SUBSTEPS` of them.
//!
//! Invariants:
//! 1. A spring at rest sits exactly on its target with zero velocity.
//! 2. `retarget` never moves the position; velocity survives only if it already points at the
//!    new target, so a retargeted spring never travels away from its new target.
//! 3. With `overshoot_clamping`, crossing the target snaps to it and the spring rests.
//! 4. Termination is threshold based (displacement and speed), never time based.

use serde::{Deserialize, Serialize};

/// Physical constants and rest policy for one spring leg. Deserialized profiles must name
/// every field.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringProfile {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f32,
    pub rest_speed_threshold: f32,
}

const MIN_MASS: f32 = 1.0e-4;
/// Sub-steps integrated per `step` call at most; time beyond that is dropped.
const MAX_SUBSTEPS: u32 = 1024;

impl SpringProfile {
    /// Slightly underdamped; a focused tab arrives with a small settle.
    pub fn expand() -> Self {
        Self {
            damping: 20.0,
            stiffness: 300.0,
            mass: 0.5,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }

    /// Stiffer and heavier damped, clamped at the target; a deselected tab snaps shut.
    pub fn collapse() -> Self {
        Self {
            damping: 25.0,
            stiffness: 400.0,
            mass: 0.4,
            overshoot_clamping: true,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 0.01,
        }
    }

    fn sanitized(&self) -> (f32, f32, f32) {
        let k = if self.stiffness.is_finite() {
            self.stiffness.max(0.0)
        } else {
            0.0
        };
        let c = if self.damping.is_finite() {
            self.damping.max(0.0)
        } else {
            0.0
        };
        let m = if self.mass.is_finite() {
            self.mass.max(MIN_MASS)
        } else {
            1.0
        };
        (k, c, m)
    }
}

impl Default for SpringProfile {
    fn default() -> Self {
        Self::expand()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    profile: SpringProfile,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `value`.
    pub fn at_rest(value: f32, profile: SpringProfile) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            profile,
            at_rest: true,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn profile(&self) -> &SpringProfile {
        &self.profile
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Aim at a new target from wherever the spring currently is.
    pub fn retarget(&mut self, target: f32, profile: SpringProfile) {
        self.profile = profile;
        self.target = target;
        let toward = target - self.position;
        if self.velocity * toward <= 0.0 {
            self.velocity = 0.0;
        }
        self.at_rest = false;
        self.settle_if_within_thresholds();
    }

    /// Jump to `value` and rest there.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds. Returns `true` while the spring is still moving.
    pub fn step(&mut self, dt: f32, max_step: f32) -> bool {
        if self.at_rest {
            return false;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return true;
        }
        let max_step = if max_step.is_finite() && max_step > 0.0 {
            max_step
        } else {
            dt
        };
        let (k, c, m) = self.profile.sanitized();
        let inv_mass = 1.0 / m;

        let substeps = (dt / max_step).ceil().clamp(1.0, MAX_SUBSTEPS as f32) as u32;
        let h = (dt / substeps as f32).min(max_step);
        for _ in 0..substeps {
            if self.at_rest {
                break;
            }
            let before = self.position - self.target;
            let spring_force = -k * before;
            let damping_force = -c * self.velocity;
            let acceleration = (spring_force + damping_force) * inv_mass;
            self.velocity += acceleration * h;
            self.position += self.velocity * h;

            let after = self.position - self.target;
            let crossed = before != 0.0 && (after == 0.0 || after.signum() != before.signum());
            if self.profile.overshoot_clamping && crossed {
                self.snap_to(self.target);
                break;
            }
            self.settle_if_within_thresholds();
        }
        !self.at_rest
    }

    fn settle_if_within_thresholds(&mut self) {
        let displacement = (self.position - self.target).abs();
        if displacement < self.profile.rest_displacement_threshold
            && self.velocity.abs() < self.profile.rest_speed_threshold
        {
            self.snap_to(self.target);
        }
    }
}
