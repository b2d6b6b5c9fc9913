//! Fundamental fixed-size types used across the entire workspace.

use nalgebra::{Matrix2, Matrix2x4, Matrix4, Matrix4x2, Vector2, Vector4};

// ---------------------------------------------------------------------------
// Scalar type: use f64 throughout for numerical precision in the filter.
// All shapes are fixed and known ahead of time, so every matrix role gets a
// compile-time-sized alias rather than a dynamic matrix.
// ---------------------------------------------------------------------------

/// 4-DOF state vector: [px, py, vx, vy]
pub type StateVec = Vector4<f64>;

/// 4×4 state covariance matrix
pub type StateCov = Matrix4<f64>;

/// 2-D position measurement: [px, py]
pub type MeasVec = Vector2<f64>;

/// 2×2 measurement-space covariance (measurement noise R, innovation S)
pub type MeasCov = Matrix2<f64>;

/// 2×4 observation matrix H (state to measured subspace)
pub type ObsMat = Matrix2x4<f64>;

/// 4×2 Kalman gain K
pub type GainMat = Matrix4x2<f64>;
