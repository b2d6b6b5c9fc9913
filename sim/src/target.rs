//! Target trajectory models and state propagation.
//!
//! The target has a 4-DOF true state [px,py,vx,vy] and a `MotionSpec`
//! describing how it moves. The simulation loop steps it forward in time.

use serde::{Deserialize, Serialize};

/// Describes how the target moves.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum MotionSpec {
    /// Constant velocity: no acceleration. The estimator's own model, so the
    /// only tracking error comes from measurement noise.
    ConstantVelocity,
    /// Constant-turn-rate on the XY plane. `omega` = yaw rate (rad/s).
    ConstantTurn { omega: f64 },
    /// Constant acceleration. `ax, ay` in m/s².
    ConstantAccel { ax: f64, ay: f64 },
}

/// The simulated target with ground-truth state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Target {
    /// True state [px, py, vx, vy]
    pub state: [f64; 4],
    /// Motion model for this target
    pub motion: MotionSpec,
}

impl Target {
    pub fn new(pos: [f64; 2], vel: [f64; 2], motion: MotionSpec) -> Self {
        Self {
            state: [pos[0], pos[1], vel[0], vel[1]],
            motion,
        }
    }

    /// Propagate the true state by `dt` seconds according to the motion spec.
    pub fn step(&mut self, dt: f64) {
        let s = &mut self.state;
        match self.motion {
            MotionSpec::ConstantVelocity => {
                s[0] += s[2] * dt;
                s[1] += s[3] * dt;
            }
            MotionSpec::ConstantTurn { omega } => {
                let v = (s[2] * s[2] + s[3] * s[3]).sqrt();
                let heading = s[3].atan2(s[2]);
                let new_heading = heading + omega * dt;
                s[0] += v * heading.cos() * dt;
                s[1] += v * heading.sin() * dt;
                s[2] = v * new_heading.cos();
                s[3] = v * new_heading.sin();
            }
            MotionSpec::ConstantAccel { ax, ay } => {
                s[0] += s[2] * dt + 0.5 * ax * dt * dt;
                s[1] += s[3] * dt + 0.5 * ay * dt * dt;
                s[2] += ax * dt;
                s[3] += ay * dt;
            }
        }
    }

    /// True position.
    pub fn pos(&self) -> (f64, f64) {
        (self.state[0], self.state[1])
    }

    /// True velocity.
    pub fn vel(&self) -> (f64, f64) {
        (self.state[2], self.state[3])
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn constant_velocity_moves_linearly() {
        let mut target = Target::new([0.0, 0.0], [10.0, -5.0], MotionSpec::ConstantVelocity);
        for _ in 0..100 {
            target.step(0.01);
        }
        // 1 second of travel
        assert_abs_diff_eq!(target.state[0], 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(target.state[1], -5.0, epsilon = 1e-9);
        assert_eq!(target.vel(), (10.0, -5.0));
    }

    #[test]
    fn constant_turn_preserves_speed() {
        let mut target = Target::new(
            [0.0, 0.0],
            [3.0, 4.0],
            MotionSpec::ConstantTurn { omega: 0.5 },
        );
        for _ in 0..1000 {
            target.step(0.01);
        }
        let (vx, vy) = target.vel();
        let speed = (vx * vx + vy * vy).sqrt();
        assert_abs_diff_eq!(speed, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_accel_builds_velocity() {
        let mut target = Target::new(
            [0.0, 0.0],
            [0.0, 0.0],
            MotionSpec::ConstantAccel { ax: 2.0, ay: -1.0 },
        );
        for _ in 0..200 {
            target.step(0.01);
        }
        // v = a·t and p = a·t²/2 after t = 2 s
        let (vx, vy) = target.vel();
        assert_abs_diff_eq!(vx, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(vy, -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(target.state[0], 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(target.state[1], -2.0, epsilon = 1e-9);
    }
}
