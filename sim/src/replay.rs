//! Replay: serialize/deserialize run logs for offline re-estimation.

use crate::sensor::SensorReading;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// A full recorded run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunLog {
    pub scenario_name: String,
    pub seed: u64,
    /// Estimator tick rate the run was produced with (Hz)
    pub freq: f64,
    pub duration: f64,
    /// All sensor readings in chronological order
    pub readings: Vec<SensorReading>,
    /// Ground-truth state, sampled every tick
    pub truth: Vec<StateSample>,
    /// Estimator state, sampled every tick
    pub estimates: Vec<StateSample>,
}

/// One timestamped [px, py, vx, vy] snapshot.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct StateSample {
    pub t: f64,
    pub state: [f64; 4],
}

/// Save a run log to a JSON file.
pub fn save_run(log: &RunLog, path: &Path) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, log)?;
    Ok(())
}

/// Load a run log from a JSON file.
pub fn load_run(path: &Path) -> anyhow::Result<RunLog> {
    let file = std::fs::File::open(path)?;
    let reader = BufReader::new(file);
    let log: RunLog = serde_json::from_reader(reader)?;
    Ok(log)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
