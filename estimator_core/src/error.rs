//! Errors surfaced by the estimator.

use thiserror::Error;

/// Errors that can occur during estimator construction or correction.
#[derive(Clone, Debug, Error)]
pub enum EstimatorError {
    /// The configuration cannot produce a usable model (bad sampling
    /// frequency or noise parameter). Fatal to construction: no estimator
    /// instance is returned.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The innovation covariance was singular (or its inverse non-finite)
    /// during a correct step. The measurement was not fused and the state
    /// estimate is unchanged; the caller decides whether to skip the
    /// measurement, re-initialize, or drop the track.
    #[error("innovation covariance is singular")]
    SingularInnovation,
}
