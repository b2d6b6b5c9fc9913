//! `pvtrack` CLI: scenario runs, replay import/export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use estimator_core::{EstimatorConfig, LinearStateEstimator, MeasVec};
use sim::metrics::TrackingErrorStats;
use sim::replay::{load_run, save_run, RunLog, StateSample};
use sim::scenarios::{Scenario, ScenarioKind};
use sim::sensor::{PositionSensor, SensorReading};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pvtrack", about = "Single-object position/velocity tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a named scenario in batch mode and output tracking metrics.
    RunScenario {
        #[arg(value_enum)]
        scenario: ScenarioKind,
        /// Random seed for reproducibility
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Override the estimator tick rate (Hz)
        #[arg(long)]
        freq: Option<f64>,
        /// Override the scenario duration (s)
        #[arg(long)]
        duration: Option<f64>,
        /// Output metrics to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also save the full run log
        #[arg(long)]
        save_log: Option<PathBuf>,
    },
    /// Re-estimate a previously recorded run from its logged readings.
    Replay {
        /// Path to run-log JSON file
        input: PathBuf,
        /// Output metrics to a JSON file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::RunScenario {
            scenario,
            seed,
            freq,
            duration,
            output,
            save_log,
        } => {
            run_scenario(
                scenario,
                seed,
                freq,
                duration,
                output.as_deref(),
                save_log.as_deref(),
            )?;
        }
        Commands::Replay { input, output } => {
            run_replay(&input, output.as_deref())?;
        }
    }

    Ok(())
}

fn run_scenario(
    kind: ScenarioKind,
    seed: u64,
    freq_override: Option<f64>,
    duration_override: Option<f64>,
    output_path: Option<&std::path::Path>,
    log_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut scenario = Scenario::build(kind, seed);
    if let Some(freq) = freq_override {
        tracing::info!(freq, "overriding scenario tick rate");
        scenario.freq = freq;
    }
    if let Some(duration) = duration_override {
        scenario.duration = duration;
    }

    let mut estimator = LinearStateEstimator::with_config(EstimatorConfig {
        freq: scenario.freq,
        ..Default::default()
    })?;
    let mut sensor = PositionSensor::new(scenario.sensor.clone(), seed);
    let mut target = scenario.target.clone();
    let mut stats = TrackingErrorStats::default();

    let dt = estimator.dt();
    let duration = scenario.duration;
    let mut t = 0.0f64;
    let mut readings: Vec<SensorReading> = Vec::new();
    let mut truth_frames: Vec<StateSample> = Vec::new();
    let mut estimate_frames: Vec<StateSample> = Vec::new();
    let mut n_missed = 0u64;

    println!(
        "Running scenario '{}' (seed={}, duration={:.0}s)...",
        scenario.name, seed, duration
    );

    let start = std::time::Instant::now();
    let mut n_ticks = 0u64;

    while t < duration {
        // Step the target
        target.step(dt);
        t += dt;
        n_ticks += 1;

        estimator.predict();

        // Fuse a sensor reading when one is due
        if sensor.should_sample(t) {
            match sensor.sample(&target, t) {
                Some(reading) => {
                    readings.push(reading);
                    let z = MeasVec::new(reading.z[0], reading.z[1]);
                    if let Err(err) = estimator.correct(&z) {
                        tracing::warn!(%err, t, "measurement rejected");
                    }
                }
                None => n_missed += 1,
            }
        }

        // Record truth and estimate for metrics and replay
        let x = estimator.state();
        truth_frames.push(StateSample {
            t,
            state: target.state,
        });
        estimate_frames.push(StateSample {
            t,
            state: [x[0], x[1], x[2], x[3]],
        });
        stats.accumulate(&x, &target.state);
    }

    let elapsed = start.elapsed();
    let n_readings = readings.len();
    println!(
        "Done: {} ticks, {} readings ({} missed), elapsed={:.2}s",
        n_ticks,
        n_readings,
        n_missed,
        elapsed.as_secs_f64(),
    );
    println!(
        "RMSE: position={:.3} m, velocity={:.3} m/s",
        stats.rmse_position(),
        stats.rmse_velocity()
    );

    // Save run log if requested
    if let Some(lpath) = log_path {
        let log = RunLog {
            scenario_name: scenario.name.clone(),
            seed,
            freq: scenario.freq,
            duration,
            readings,
            truth: truth_frames,
            estimates: estimate_frames,
        };
        save_run(&log, lpath)?;
        println!("Run log saved to {}", lpath.display());
    }

    // Output metrics
    if let Some(opath) = output_path {
        let json = serde_json::json!({
            "scenario": scenario.name,
            "seed": seed,
            "freq": scenario.freq,
            "duration": duration,
            "elapsed_s": elapsed.as_secs_f64(),
            "n_readings": n_readings,
            "n_missed": n_missed,
            "rmse_position": stats.rmse_position(),
            "rmse_velocity": stats.rmse_velocity(),
        });
        std::fs::write(opath, serde_json::to_string_pretty(&json)?)?;
        println!("Metrics saved to {}", opath.display());
    }

    Ok(())
}

fn run_replay(input: &std::path::Path, output_path: Option<&std::path::Path>) -> Result<()> {
    let log = load_run(input)?;
    println!(
        "Replaying '{}' ({} readings, {} ticks)...",
        log.scenario_name,
        log.readings.len(),
        log.truth.len()
    );

    let mut estimator = LinearStateEstimator::with_config(EstimatorConfig {
        freq: log.freq,
        ..Default::default()
    })?;
    let mut stats = TrackingErrorStats::default();
    let start = std::time::Instant::now();

    let mut next_reading = 0usize;
    for truth in &log.truth {
        estimator.predict();
        // A reading's arrival stamp is the tick clock at the moment it was
        // fused, so consume through the current tick inclusive.
        while next_reading < log.readings.len() && log.readings[next_reading].arrival_t <= truth.t {
            let reading = log.readings[next_reading];
            next_reading += 1;
            let z = MeasVec::new(reading.z[0], reading.z[1]);
            if let Err(err) = estimator.correct(&z) {
                tracing::warn!(%err, t = reading.t, "measurement rejected");
            }
        }
        stats.accumulate(&estimator.state(), &truth.state);
    }

    let elapsed = start.elapsed();
    println!(
        "Replay done: {} readings fused, elapsed={:.2}s",
        next_reading,
        elapsed.as_secs_f64()
    );
    println!(
        "RMSE: position={:.3} m, velocity={:.3} m/s",
        stats.rmse_position(),
        stats.rmse_velocity()
    );

    if let Some(opath) = output_path {
        let json = serde_json::json!({
            "scenario": log.scenario_name,
            "seed": log.seed,
            "freq": log.freq,
            "elapsed_s": elapsed.as_secs_f64(),
            "rmse_position": stats.rmse_position(),
            "rmse_velocity": stats.rmse_velocity(),
        });
        std::fs::write(opath, serde_json::to_string_pretty(&json)?)?;
    }

    Ok(())
}
