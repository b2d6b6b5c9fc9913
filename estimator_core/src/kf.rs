//! Linear Kalman filter: the predict / correct cycle for one tracked object.
//!
//! # Design choices
//! - Linear KF with a constant-velocity (CV) motion model over a fixed
//!   timestep `dt = 1/freq`; all model matrices are built once at
//!   construction and never change.
//! - All math is done in `f64` via `nalgebra` fixed-size types, so every
//!   matrix shape is checked at compile time.
//! - The estimator owns its state: `predict` and `correct` mutate x and Σ in
//!   place through `&mut self`, which also makes exclusive access a
//!   compile-time guarantee.
//!
//! ## State vector
//! x = [px, py, vx, vy]ᵀ  (4-dimensional)
//!
//! ## CV transition model
//! A = I₄ with A[(0,2)] = A[(1,3)] = dt
//! i.e. px += vx·dt, py += vy·dt.
//!
//! ## Noise
//! Q = diag(σ_p², σ_p², σ_v², σ_v²)  (fixed process-noise floor)
//! R = σ_z²·I₂                        (position measurement noise)
//!
//! ## Cycle
//! predict:  x ← A·x,  Σ ← A·Σ·Aᵀ + Q
//! correct:  S = H·Σ·Hᵀ + R,  K = Σ·Hᵀ·S⁻¹,
//!           x ← x + K·(z − H·x),  Σ ← (I − K·H)·Σ

use crate::error::EstimatorError;
use crate::types::{GainMat, MeasCov, MeasVec, ObsMat, StateCov, StateVec};
use nalgebra::Matrix4;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for the estimator.
#[derive(Clone, Debug)]
pub struct EstimatorConfig {
    /// Predict tick rate (Hz). The model timestep is 1/freq.
    pub freq: f64,
    /// Process noise std dev on the position components (m).
    pub pos_noise_std: f64,
    /// Process noise std dev on the velocity components (m/s).
    pub vel_noise_std: f64,
    /// Measurement noise std dev on each measured axis (m).
    pub meas_noise_std: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            freq: 200.0, // 200 Hz predict tick
            pos_noise_std: 1e-3,
            vel_noise_std: 1e-3,
            meas_noise_std: 1.0, // 1 m std dev per measured axis
        }
    }
}

// ---------------------------------------------------------------------------
// Estimator
// ---------------------------------------------------------------------------

/// Single-object linear Kalman filter over [px, py, vx, vy].
///
/// The canonical cycle is predict → correct → predict → … driven by the
/// surrounding tracking loop; the estimator is valid and queryable
/// immediately after construction and after every call.
#[derive(Clone, Debug)]
pub struct LinearStateEstimator {
    /// Model timestep (s), baked into `a`.
    dt: f64,
    /// State-transition model A.
    a: Matrix4<f64>,
    /// Observation model H (position only).
    h: ObsMat,
    /// Process noise Q.
    q: Matrix4<f64>,
    /// Measurement noise R.
    r: MeasCov,
    /// State estimate x.
    x: StateVec,
    /// Estimate covariance Σ.
    sigma: StateCov,
}

impl LinearStateEstimator {
    /// Create an estimator at the given predict tick rate (Hz) with the
    /// default noise levels.
    pub fn new(freq: f64) -> Result<Self, EstimatorError> {
        Self::with_config(EstimatorConfig {
            freq,
            ..Default::default()
        })
    }

    /// Create an estimator from a full configuration.
    pub fn with_config(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        let dt = 1.0 / config.freq;
        if !dt.is_finite() || dt <= 0.0 {
            return Err(EstimatorError::Config(format!(
                "freq {} yields timestep {dt}; need a positive finite timestep",
                config.freq
            )));
        }
        for (name, std_dev) in [
            ("pos_noise_std", config.pos_noise_std),
            ("vel_noise_std", config.vel_noise_std),
            ("meas_noise_std", config.meas_noise_std),
        ] {
            if !std_dev.is_finite() || std_dev < 0.0 {
                return Err(EstimatorError::Config(format!(
                    "{name} {std_dev} must be finite and non-negative"
                )));
            }
        }

        Ok(Self {
            dt,
            a: Self::transition_matrix(dt),
            h: Self::observation_matrix(),
            q: Self::process_noise(config.pos_noise_std, config.vel_noise_std),
            r: Self::measurement_noise(config.meas_noise_std),
            x: StateVec::zeros(),
            sigma: StateCov::identity(),
        })
    }

    /// Build the CV state-transition matrix A for timestep `dt`.
    pub fn transition_matrix(dt: f64) -> Matrix4<f64> {
        let mut a = Matrix4::<f64>::identity();
        // position += velocity * dt
        a[(0, 2)] = dt;
        a[(1, 3)] = dt;
        a
    }

    /// Build the position-only observation matrix H.
    fn observation_matrix() -> ObsMat {
        ObsMat::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0,
        )
    }

    /// Build the diagonal process-noise matrix Q from per-component std devs.
    fn process_noise(pos_std: f64, vel_std: f64) -> Matrix4<f64> {
        let qp = pos_std * pos_std;
        let qv = vel_std * vel_std;
        Matrix4::from_diagonal(&StateVec::new(qp, qp, qv, qv))
    }

    /// Build the measurement-noise matrix R = σ²·I₂.
    fn measurement_noise(meas_std: f64) -> MeasCov {
        MeasCov::identity() * (meas_std * meas_std)
    }

    /// Model timestep (s) the transition matrix was built with.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Current state estimate [px, py, vx, vy] (read-only snapshot).
    pub fn state(&self) -> StateVec {
        self.x
    }

    /// Current estimate covariance (read-only snapshot).
    pub fn covariance(&self) -> StateCov {
        self.sigma
    }

    /// Advance the estimate by one model timestep: x ← A·x, Σ ← A·Σ·Aᵀ + Q.
    ///
    /// Call once per fixed-duration tick matching the dt the estimator was
    /// built with; calling at a different effective rate silently
    /// desynchronizes the model from real time.
    pub fn predict(&mut self) {
        self.x = self.a * self.x;
        self.sigma = self.a * self.sigma * self.a.transpose() + self.q;
    }

    /// Fuse one position measurement `z`, expressed in the same coordinate
    /// frame as the state's position components.
    ///
    /// On a singular innovation covariance the measurement is rejected with
    /// [`EstimatorError::SingularInnovation`] and x / Σ keep their pre-call
    /// values.
    pub fn correct(&mut self, z: &MeasVec) -> Result<(), EstimatorError> {
        // Innovation covariance: S = H·Σ·Hᵀ + R
        let s: MeasCov = self.h * self.sigma * self.h.transpose() + self.r;

        // Kalman gain: K = Σ·Hᵀ·S⁻¹. Bail out before touching x / Σ so a
        // failed correction leaves the estimate intact.
        let s_inv = s.try_inverse().ok_or(EstimatorError::SingularInnovation)?;
        if s_inv.iter().any(|v| !v.is_finite()) {
            return Err(EstimatorError::SingularInnovation);
        }
        let k: GainMat = self.sigma * self.h.transpose() * s_inv;

        // Innovation: ν = z − H·x
        let innovation = z - self.h * self.x;

        // x ← x + K·ν,  Σ ← (I − K·H)·Σ
        self.x += k * innovation;
        self.sigma = (Matrix4::<f64>::identity() - k * self.h) * self.sigma;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
