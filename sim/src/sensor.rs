//! Position sensor simulator.
//!
//! Generates noisy 2-D position samples of the target with:
//! - Uniform position noise on each axis
//! - Miss probability (1 - P_D)
//! - A fixed sampling schedule decoupled from the simulation tick rate

use crate::target::Target;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Sensor configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorParams {
    /// Sample rate (Hz). May be lower than the estimator tick rate.
    pub rate: f64,
    /// Probability that a scheduled sample actually produces a reading.
    pub p_detection: f64,
    /// Half-width of the uniform position noise on each axis (m); the
    /// resulting std dev is half_width/√3.
    pub noise_std: f64,
}

impl Default for SensorParams {
    fn default() -> Self {
        Self {
            rate: 200.0,
            p_detection: 1.0,
            noise_std: 1.0, // 1 m half-width
        }
    }
}

/// One noisy position sample.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SensorReading {
    /// Scheduled sample time (s).
    pub t: f64,
    /// Simulation-clock time the reading reached the tracking loop (s).
    pub arrival_t: f64,
    /// Measured position [x, y] (m).
    pub z: [f64; 2],
}

/// Generates position readings from the target on a fixed schedule.
pub struct PositionSensor {
    pub params: SensorParams,
    /// Next scheduled sample time
    next_sample_time: f64,
    rng: ChaCha8Rng,
}

impl PositionSensor {
    pub fn new(params: SensorParams, seed: u64) -> Self {
        Self {
            params,
            next_sample_time: 0.0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Check if the sensor should fire at the current simulation time.
    pub fn should_sample(&self, t: f64) -> bool {
        t >= self.next_sample_time
    }

    /// Take one scheduled sample of the target at simulation time `t`.
    /// Advances the schedule and returns `None` on a missed detection.
    pub fn sample(&mut self, target: &Target, t: f64) -> Option<SensorReading> {
        let sample_time = self.next_sample_time;
        self.next_sample_time += 1.0 / self.params.rate;

        // Miss detection?
        if self.rng.gen::<f64>() > self.params.p_detection {
            return None;
        }

        let noise = self.params.noise_std;
        let nx = self.rng.gen::<f64>() * noise * 2.0 - noise;
        let ny = self.rng.gen::<f64>() * noise * 2.0 - noise;
        let (tx, ty) = target.pos();

        Some(SensorReading {
            t: sample_time,
            arrival_t: t,
            z: [tx + nx, ty + ny],
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::MotionSpec;

    fn cv_target() -> Target {
        Target::new([100.0, -50.0], [10.0, 5.0], MotionSpec::ConstantVelocity)
    }

    #[test]
    fn same_seed_same_readings() {
        let mut a = PositionSensor::new(SensorParams::default(), 7);
        let mut b = PositionSensor::new(SensorParams::default(), 7);
        let mut target = cv_target();
        let mut t = 0.0;
        for _ in 0..20 {
            target.step(0.005);
            t += 0.005;
            let ra = a.sample(&target, t);
            let rb = b.sample(&target, t);
            match (ra, rb) {
                (Some(ra), Some(rb)) => {
                    assert_eq!(ra.t, rb.t);
                    assert_eq!(ra.arrival_t, rb.arrival_t);
                    assert_eq!(ra.z, rb.z);
                }
                (None, None) => {}
                _ => panic!("same seed must miss the same samples"),
            }
        }
    }

    #[test]
    fn noise_stays_within_bounds() {
        let params = SensorParams {
            noise_std: 2.0,
            ..Default::default()
        };
        let mut sensor = PositionSensor::new(params, 42);
        let target = cv_target();
        for i in 0..200 {
            let reading = sensor
                .sample(&target, i as f64 * 0.005)
                .expect("P_D = 1 never misses");
            let (tx, ty) = target.pos();
            assert!((reading.z[0] - tx).abs() <= 2.0);
            assert!((reading.z[1] - ty).abs() <= 2.0);
        }
    }

    #[test]
    fn uniform_noise_std_is_half_width_over_sqrt_three() {
        let mut sensor = PositionSensor::new(SensorParams::default(), 11);
        let target = Target::new([0.0, 0.0], [0.0, 0.0], MotionSpec::ConstantVelocity);

        let n = 10_000usize;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for i in 0..n {
            let reading = sensor
                .sample(&target, i as f64 * 0.005)
                .expect("P_D = 1 never misses");
            for err in reading.z {
                sum += err;
                sum_sq += err * err;
            }
        }
        let samples = (2 * n) as f64;
        let mean = sum / samples;
        let std = (sum_sq / samples - mean * mean).sqrt();
        assert!(mean.abs() < 0.03, "mean = {mean}");
        // Uniform on [-w, w] has std w/√3, not w.
        let expected = 1.0 / 3.0_f64.sqrt();
        assert!((std - expected).abs() < 0.02, "std = {std}, want ~{expected}");
    }

    #[test]
    fn zero_detection_probability_never_detects() {
        let params = SensorParams {
            p_detection: 0.0,
            ..Default::default()
        };
        let mut sensor = PositionSensor::new(params, 3);
        let target = cv_target();
        for i in 0..50 {
            assert!(sensor.sample(&target, i as f64 * 0.005).is_none());
        }
    }

    #[test]
    fn schedule_advances_by_sample_interval() {
        let params = SensorParams {
            rate: 4.0,
            ..Default::default()
        };
        let mut sensor = PositionSensor::new(params, 0);
        let target = cv_target();

        assert!(sensor.should_sample(0.0));
        let reading = sensor.sample(&target, 0.0).expect("P_D = 1 never misses");
        assert_eq!(reading.t, 0.0);

        assert!(!sensor.should_sample(0.2));
        assert!(sensor.should_sample(0.25));
        let reading = sensor.sample(&target, 0.26).expect("P_D = 1 never misses");
        assert_eq!(reading.t, 0.25, "stamped with the scheduled time");
        assert_eq!(reading.arrival_t, 0.26, "stamped with the delivery time");
    }
}
