//! Input-array builders for the example trajectories.
//!
//! Each builder produces two equal-length sequences of (speed, steering-rate)
//! samples at uniform `sample_time` spacing, plus the run options a scenario
//! needs (a direct steering preset, or the simplified no-sideslip stepping).

use std::f64::consts::PI;
use velo_kinematics::BicycleParams;

/// One open-loop trajectory: input arrays plus run options.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Short name, also used for the exported table file.
    pub name: &'static str,
    /// Vehicle parameters for this run.
    pub params: BicycleParams,
    /// Speed input per sample (m/s).
    pub v: Vec<f64>,
    /// Steering-rate input per sample (rad/s).
    pub w: Vec<f64>,
    /// Steering angle to preset before the first step, if any.
    pub steering_preset: Option<f64>,
    /// Force the slip angle to zero on every step (simplified model).
    pub zero_slip: bool,
}

impl Scenario {
    fn open_loop(name: &'static str, duration_sec: f64) -> Self {
        let params = BicycleParams::default();
        let n = (duration_sec / params.sample_time).round() as usize;
        Scenario {
            name,
            params,
            v: vec![0.0; n],
            w: vec![0.0; n],
            steering_preset: None,
            zero_slip: false,
        }
    }
}

/// Look up a builder by its configured name.
pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "circle_preset" => Some(circle_preset()),
        "circle_ramped" => Some(circle_ramped()),
        "square" => Some(square()),
        "spiral" => Some(spiral()),
        "wave" => Some(wave()),
        "figure_eight" => Some(figure_eight()),
        _ => None,
    }
}

/// A 10 m-radius circle in 20 s, steering preset to δ = atan(L/r).
pub fn circle_preset() -> Scenario {
    let mut scenario = Scenario::open_loop("circle_preset", 20.0);
    scenario.v.fill(PI);
    scenario.steering_preset = Some((2.0_f64 / 10.0).atan());
    scenario
}

/// The same circle reached through rate inputs: full-rate steering until the
/// accumulated angle passes atan(L/r), then zero.
pub fn circle_ramped() -> Scenario {
    let mut scenario = Scenario::open_loop("circle_ramped", 20.0);
    scenario.v.fill(PI);

    let target = (2.0_f64 / 10.0).atan();
    let rate = scenario.params.max_steer_rate;
    let dt = scenario.params.sample_time;
    let mut steering = 0.0;
    for wi in scenario.w.iter_mut() {
        if steering < target {
            *wi = rate;
            steering += rate * dt;
        }
    }
    scenario
}

/// A square path at 4 m/s over 60 s: paired steering-rate pulses at each corner.
pub fn square() -> Scenario {
    let mut scenario = Scenario::open_loop("square", 60.0);
    scenario.v.fill(4.0);
    for start in [670, 2210, 3670, 5220] {
        scenario.w[start..start + 100].fill(0.753);
        scenario.w[start + 100..start + 200].fill(-0.753);
    }
    scenario
}

/// A spiral: wind the steering hard for 1 s, then unwind it slowly.
pub fn spiral() -> Scenario {
    let mut scenario = Scenario::open_loop("spiral", 60.0);
    scenario.v.fill(4.0);
    scenario.w.fill(-0.01);
    scenario.w[..100].fill(1.0);
    scenario
}

/// A wave path: a square-wave steering-rate input.
pub fn wave() -> Scenario {
    let mut scenario = Scenario::open_loop("wave", 60.0);
    scenario.v.fill(4.0);
    scenario.w[..100].fill(1.0);
    scenario.w[100..300].fill(-1.0);
    scenario.w[300..500].fill(1.0);
    let block = scenario.w[100..500].to_vec();
    for k in 0..13 {
        let start = 500 + 400 * k;
        scenario.w[start..start + 400].copy_from_slice(&block);
    }
    scenario.w[5700..].fill(-1.0);
    scenario
}

/// Two tangent 8 m circles traced in 30 s, with the slip angle forced to
/// zero on every step.
pub fn figure_eight() -> Scenario {
    let mut scenario = Scenario::open_loop("figure_eight", 30.0);
    scenario.v.fill((16.0 / 15.0) * PI);
    scenario.w[..100].fill((2.0_f64 / 8.0).atan());
    scenario.w[375..475].fill(2.0 * (-2.0_f64 / 8.0).atan());
    scenario.w[1875..1975].fill(2.0 * (2.0_f64 / 8.0).atan());
    scenario.zero_slip = true;
    scenario
}
