//! Tracking accuracy metrics: RMSE position/velocity against ground truth.

use estimator_core::StateVec;
use serde::{Deserialize, Serialize};

/// Accumulated tracking-error statistics.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrackingErrorStats {
    /// Number of (estimate, truth) pairs evaluated
    pub n_samples: u64,
    /// Sum of squared position errors (for RMSE)
    pub sum_sq_pos_err: f64,
    /// Sum of squared velocity errors (for RMSE)
    pub sum_sq_vel_err: f64,
}

impl TrackingErrorStats {
    /// Accumulate one tick's estimate against the true state [px,py,vx,vy].
    pub fn accumulate(&mut self, estimate: &StateVec, truth: &[f64; 4]) {
        let dx = estimate[0] - truth[0];
        let dy = estimate[1] - truth[1];
        let dvx = estimate[2] - truth[2];
        let dvy = estimate[3] - truth[3];
        self.sum_sq_pos_err += dx * dx + dy * dy;
        self.sum_sq_vel_err += dvx * dvx + dvy * dvy;
        self.n_samples += 1;
    }

    /// Root-mean-square position error (meters, 2D).
    pub fn rmse_position(&self) -> f64 {
        if self.n_samples == 0 {
            return 0.0;
        }
        (self.sum_sq_pos_err / self.n_samples as f64).sqrt()
    }

    /// Root-mean-square velocity error (m/s, 2D).
    pub fn rmse_velocity(&self) -> f64 {
        if self.n_samples == 0 {
            return 0.0;
        }
        (self.sum_sq_vel_err / self.n_samples as f64).sqrt()
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
    fn empty_stats_report_zero() {
        let stats = TrackingErrorStats::default();
        assert_eq!(stats.rmse_position(), 0.0);
        assert_eq!(stats.rmse_velocity(), 0.0);
    }

    #[test]
    fn rmse_of_constant_offset() {
        let mut stats = TrackingErrorStats::default();
        // estimate is off by (3, 4) in position and (4, 3) in velocity
        let estimate = StateVec::new(3.0, 4.0, 4.0, 3.0);
        let truth = [0.0, 0.0, 0.0, 0.0];
        for _ in 0..10 {
            stats.accumulate(&estimate, &truth);
        }
        assert_eq!(stats.n_samples, 10);
        assert_abs_diff_eq!(stats.rmse_position(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stats.rmse_velocity(), 5.0, epsilon = 1e-12);
    }
}
