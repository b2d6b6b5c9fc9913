//! `sim` — Single-entity scenario simulator: true motion, noisy position
//! samples, accuracy metrics, replay.

pub mod metrics;
pub mod replay;
pub mod scenarios;
pub mod sensor;
pub mod target;

pub use metrics::TrackingErrorStats;
pub use replay::{load_run, save_run, RunLog, StateSample};
pub use scenarios::{Scenario, ScenarioKind};
pub use sensor::{PositionSensor, SensorParams, SensorReading};
pub use target::{MotionSpec, Target};
