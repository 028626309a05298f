//! Batch run loop driving the integrator over a scenario's input arrays.

use anyhow::Result;
use velo_kinematics::KinematicBicycle;

use crate::scenario::Scenario;

/// Recorded rear-axle trajectory with its timebase.
#[derive(Debug, Clone)]
pub struct Trajectory {
    /// Sample times (s), `t[i] = i · Δt`.
    pub t: Vec<f64>,
    /// Rear-axle x positions (m).
    pub x: Vec<f64>,
    /// Rear-axle y positions (m).
    pub y: Vec<f64>,
}

/// Run one scenario from a fresh model and record its trajectory.
///
/// The position is sampled before each step: sample i is the state at the
/// start of interval i, so the recording has N points covering
/// `[0, (N−1)·Δt]` and the final input sample is never visible in it.
pub fn simulate(scenario: &Scenario) -> Result<Trajectory> {
    let mut model = KinematicBicycle::new(scenario.params)?;
    if let Some(angle) = scenario.steering_preset {
        model.set_steering_angle(angle);
    }

    let n = scenario.v.len();
    debug_assert_eq!(n, scenario.w.len());
    let dt = scenario.params.sample_time;
    let mut trajectory = Trajectory {
        t: Vec::with_capacity(n),
        x: Vec::with_capacity(n),
        y: Vec::with_capacity(n),
    };

    for i in 0..n {
        let state = model.state();
        trajectory.t.push(i as f64 * dt);
        trajectory.x.push(state.x);
        trajectory.y.push(state.y);

        if scenario.zero_slip {
            model.step_with_slip(scenario.v[i], scenario.w[i], Some(0.0));
        } else {
            model.step(scenario.v[i], scenario.w[i]);
        }
    }

    Ok(trajectory)
}
