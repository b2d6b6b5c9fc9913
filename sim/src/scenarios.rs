//! Scenario definitions.
//!
//! Each scenario is a named configuration of one target and one sensor.
//! All scenarios are deterministic given the same seed.

use crate::{
    sensor::SensorParams,
    target::{MotionSpec, Target},
};
use serde::{Deserialize, Serialize};

/// Which pre-defined scenario to load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioKind {
    /// Straight-line target, full-rate sensor — the estimator's own model
    Cruise,
    /// Coordinated turn — constant model mismatch stressing the CV filter
    Turn,
    /// Constant acceleration with a quieter, half-rate sensor
    Accel,
    /// Slow sensor with misses and heavy noise — long coast segments
    Sparse,
}

/// A fully configured simulation scenario.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub seed: u64,
    pub duration: f64, // seconds
    pub freq: f64,     // estimator tick rate (Hz)
    pub target: Target,
    pub sensor: SensorParams,
}

impl Scenario {
    /// Build the named scenario. Uses `seed` for repeatability.
    pub fn build(kind: ScenarioKind, seed: u64) -> Self {
        match kind {
            ScenarioKind::Cruise => Self::cruise(seed),
            ScenarioKind::Turn => Self::turn(seed),
            ScenarioKind::Accel => Self::accel(seed),
            ScenarioKind::Sparse => Self::sparse(seed),
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 1: Cruise
    // -----------------------------------------------------------------------
    fn cruise(seed: u64) -> Self {
        Scenario {
            name: "cruise".into(),
            seed,
            duration: 30.0,
            freq: 200.0,
            target: Target::new([-60.0, 10.0], [4.0, 1.0], MotionSpec::ConstantVelocity),
            sensor: SensorParams {
                rate: 200.0,
                p_detection: 1.0,
                noise_std: 1.0,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 2: Turn
    // -----------------------------------------------------------------------
    fn turn(seed: u64) -> Self {
        Scenario {
            name: "turn".into(),
            seed,
            duration: 60.0,
            freq: 200.0,
            target: Target::new(
                [-40.0, -40.0],
                [5.0, 0.0],
                MotionSpec::ConstantTurn { omega: 0.15 },
            ),
            sensor: SensorParams {
                rate: 100.0,
                p_detection: 0.95,
                noise_std: 1.0,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 3: Accel
    // -----------------------------------------------------------------------
    fn accel(seed: u64) -> Self {
        Scenario {
            name: "accel".into(),
            seed,
            duration: 40.0,
            freq: 200.0,
            target: Target::new(
                [0.0, 0.0],
                [2.0, -1.0],
                MotionSpec::ConstantAccel { ax: 0.4, ay: 0.2 },
            ),
            sensor: SensorParams {
                rate: 100.0,
                p_detection: 1.0,
                noise_std: 0.5,
            },
        }
    }

    // -----------------------------------------------------------------------
    // Scenario 4: Sparse
    // -----------------------------------------------------------------------
    fn sparse(seed: u64) -> Self {
        Scenario {
            name: "sparse".into(),
            seed,
            duration: 45.0,
            freq: 200.0,
            target: Target::new([-100.0, 30.0], [6.0, -2.0], MotionSpec::ConstantVelocity),
            sensor: SensorParams {
                rate: 20.0,
                p_detection: 0.7,
                noise_std: 2.0,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
