//! `estimator_core` — Single-object linear Kalman filter over 2-D position
//! and velocity.
//!
//! # Module layout
//! - [`types`] — Fixed-size state / measurement vector and matrix aliases
//! - [`error`] — Errors surfaced at construction and correction
//! - [`kf`]    — The estimator: predict / correct cycle

pub mod error;
pub mod kf;
pub mod types;

pub use error::EstimatorError;
pub use kf::{EstimatorConfig, LinearStateEstimator};
pub use types::{MeasCov, MeasVec, StateCov, StateVec};
