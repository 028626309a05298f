#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for kinematic bicycle model simulation."]
#![doc = ""]
#![doc = "This crate provides the vehicle state, parameters, and a fixed-timestep"]
#![doc = "forward-Euler integrator for propagating the kinematic bicycle equations"]
#![doc = "from speed and steering-rate inputs."]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

use core::fmt;
use libm::{atan, cos, sin, tan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::KinematicsError;

/// The kinematic state of the bicycle, referenced to the rear axle.
///
/// All fields are world-frame quantities in meters and radians. The heading
/// accumulates without wraparound and may exceed `±2π` over long runs; it is
/// never normalized by the integrator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BicycleState {
    /// Rear-axle x position (m).
    pub x: f64,
    /// Rear-axle y position (m).
    pub y: f64,
    /// Heading θ (rad), unbounded.
    pub heading: f64,
    /// Front-wheel steering angle δ (rad). The angle itself is unbounded;
    /// only its rate of change is limited by the integrator.
    pub steering_angle: f64,
    /// Slip angle β (rad) between the heading and the rear-axle velocity
    /// vector, derived from the steering geometry.
    pub slip_angle: f64,
}

impl BicycleState {
    /// Construct a state from explicit field values.
    ///
    /// # Arguments
    ///
    /// * `x`: Rear-axle x position in meters.
    /// * `y`: Rear-axle y position in meters.
    /// * `heading`: Heading in radians.
    /// * `steering_angle`: Steering angle in radians.
    /// * `slip_angle`: Slip angle in radians.
    pub const fn new(x: f64, y: f64, heading: f64, steering_angle: f64, slip_angle: f64) -> Self {
        BicycleState {
            x,
            y,
            heading,
            steering_angle,
            slip_angle,
        }
    }
}

impl fmt::Display for BicycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x: {:.2} m, y: {:.2} m, θ: {:.2} rad, δ: {:.2} rad, β: {:.2} rad)",
            self.x, self.y, self.heading, self.steering_angle, self.slip_angle
        )
    }
}

/// Physical parameters of the bicycle, fixed for the lifetime of a model.
///
/// `Default` carries the reference vehicle: a 2 m wheelbase with the center
/// of mass 1.2 m ahead of the rear axle, a 1.22 rad/s steering-rate limit,
/// and a 10 ms integration timestep.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BicycleParams {
    /// Distance between front and rear axles (m).
    pub wheelbase: f64,
    /// Distance from the rear axle to the center of mass (m).
    pub rear_to_cg: f64,
    /// Maximum magnitude of the steering-rate input applied per step (rad/s).
    pub max_steer_rate: f64,
    /// Fixed integration timestep (s).
    pub sample_time: f64,
}

impl BicycleParams {
    /// Construct parameters from explicit values.
    ///
    /// # Arguments
    ///
    /// * `wheelbase`: Distance between front and rear axles in meters.
    /// * `rear_to_cg`: Distance from the rear axle to the center of mass in meters.
    /// * `max_steer_rate`: Steering-rate limit in radians per second.
    /// * `sample_time`: Integration timestep in seconds.
    pub const fn new(wheelbase: f64, rear_to_cg: f64, max_steer_rate: f64, sample_time: f64) -> Self {
        BicycleParams {
            wheelbase,
            rear_to_cg,
            max_steer_rate,
            sample_time,
        }
    }
}

impl Default for BicycleParams {
    fn default() -> Self {
        BicycleParams {
            wheelbase: 2.0,
            rear_to_cg: 1.2,
            max_steer_rate: 1.22,
            sample_time: 0.01,
        }
    }
}

impl fmt::Display for BicycleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(L: {:.2} m, l_r: {:.2} m, ω_max: {:.2} rad/s, Δt: {:.3} s)",
            self.wheelbase, self.rear_to_cg, self.max_steer_rate, self.sample_time
        )
    }
}

/// Fixed-timestep forward-Euler integrator for the kinematic bicycle model.
///
/// The model owns its state and advances it by exactly one timestep per
/// [`step`](KinematicBicycle::step) call:
///
/// ```text
/// x     += v · Δt · cos(θ + β)
/// y     += v · Δt · sin(θ + β)
/// θ     += (v · cos β · tan δ / L) · Δt
/// β      = atan(l_r · tan δ / L)
/// δ     += clamp(ω, −ω_max, ω_max) · Δt
/// ```
///
/// The displacement and heading terms use the values of `θ`, `β`, and `δ`
/// from *before* the call; the slip angle written in the fourth line is the
/// one the *next* call will read. The steering-rate input is clamped each
/// call, the accumulated steering angle is not.
///
/// `tan δ` has poles at odd multiples of π/2. The integrator does not guard
/// against them; callers must keep the steering angle inside (−π/2, π/2) or
/// accept non-finite state from that point on.
///
/// Each simulated vehicle needs its own instance; there is no provision for
/// sharing one model across concurrent callers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBicycle {
    params: BicycleParams,
    state: BicycleState,
}

impl KinematicBicycle {
    /// Construct a new model with zeroed state.
    ///
    /// # Arguments
    ///
    /// * `params`: The physical parameters of the vehicle.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidWheelbase)` if `params.wheelbase` is not positive.
    /// Returns `Err(KinematicsError::InvalidSampleTime)` if `params.sample_time` is not positive.
    ///
    /// The stepping equations themselves tolerate any parameters; rejecting
    /// degenerate ones here is a hardening choice.
    pub const fn new(params: BicycleParams) -> Result<Self, KinematicsError> {
        if params.wheelbase <= 0.0 {
            return Err(KinematicsError::InvalidWheelbase("must be positive"));
        }
        if params.sample_time <= 0.0 {
            return Err(KinematicsError::InvalidSampleTime("must be positive"));
        }
        Ok(KinematicBicycle {
            params,
            state: BicycleState::new(0.0, 0.0, 0.0, 0.0, 0.0),
        })
    }

    /// Returns a copy of the model parameters.
    pub fn params(&self) -> BicycleParams {
        self.params
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> BicycleState {
        self.state
    }

    /// Restore all five state variables to zero. Parameters are untouched.
    pub fn reset(&mut self) {
        self.state = BicycleState::default();
    }

    /// Set the steering angle directly, bypassing the rate input.
    ///
    /// The slip angle is recomputed from the new steering angle so that it
    /// stays a pure function of the steering geometry.
    ///
    /// # Arguments
    ///
    /// * `angle`: The new steering angle in radians.
    pub fn set_steering_angle(&mut self, angle: f64) {
        self.state.steering_angle = angle;
        self.state.slip_angle = self.slip_from_steering(angle);
    }

    /// Advance the state by one timestep.
    ///
    /// # Arguments
    ///
    /// * `speed`: Vehicle speed in m/s. Negative values drive the model in
    ///   reverse and are not rejected.
    /// * `steer_rate`: Steering-rate input in rad/s. Clamped to
    ///   `±max_steer_rate` before integration; never rejected.
    pub fn step(&mut self, speed: f64, steer_rate: f64) {
        self.step_with_slip(speed, steer_rate, None);
    }

    /// Advance the state by one timestep, optionally overriding the slip
    /// angle used for this call's displacement and heading terms.
    ///
    /// The override models the simplified no-sideslip variant of the
    /// equations (e.g. `Some(0.0)` drives the rear axle exactly along the
    /// heading). It affects only the current call: the stored slip angle is
    /// still recomputed from the steering angle before the call returns.
    ///
    /// # Arguments
    ///
    /// * `speed`: Vehicle speed in m/s.
    /// * `steer_rate`: Steering-rate input in rad/s, clamped as in [`step`](KinematicBicycle::step).
    /// * `slip_override`: Slip angle in radians to use in place of the
    ///   stored one for this call, or `None` for the full model.
    pub fn step_with_slip(&mut self, speed: f64, steer_rate: f64, slip_override: Option<f64>) {
        let BicycleParams {
            wheelbase,
            max_steer_rate,
            sample_time,
            ..
        } = self.params;

        // Pre-update values; the ordering below is what keeps the slip angle
        // in the displacement terms one step behind the steering angle.
        let heading = self.state.heading;
        let steering = self.state.steering_angle;
        let slip = slip_override.unwrap_or(self.state.slip_angle);

        self.state.x += speed * sample_time * cos(heading + slip);
        self.state.y += speed * sample_time * sin(heading + slip);
        self.state.heading += speed * cos(slip) * tan(steering) / wheelbase * sample_time;
        self.state.slip_angle = self.slip_from_steering(steering);
        self.state.steering_angle += steer_rate.clamp(-max_steer_rate, max_steer_rate) * sample_time;
    }

    fn slip_from_steering(&self, steering: f64) -> f64 {
        atan(self.params.rear_to_cg * tan(steering) / self.params.wheelbase)
    }
}

impl Default for KinematicBicycle {
    fn default() -> Self {
        KinematicBicycle {
            params: BicycleParams::default(),
            state: BicycleState::default(),
        }
    }
}

impl fmt::Display for KinematicBicycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KinematicBicycle {} at {}",
            self.params, self.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_params_default_reference_vehicle() {
        let params = BicycleParams::default();
        assert_eq!(params.wheelbase, 2.0);
        assert_eq!(params.rear_to_cg, 1.2);
        assert_eq!(params.max_steer_rate, 1.22);
        assert_eq!(params.sample_time, 0.01);
    }

    #[test]
    fn test_constructor_invalid_wheelbase() {
        let result = KinematicBicycle::new(BicycleParams::new(0.0, 1.2, 1.22, 0.01));
        assert!(matches!(
            result,
            Err(KinematicsError::InvalidWheelbase("must be positive"))
        ));
        let result_negative = KinematicBicycle::new(BicycleParams::new(-2.0, 1.2, 1.22, 0.01));
        assert!(matches!(
            result_negative,
            Err(KinematicsError::InvalidWheelbase("must be positive"))
        ));
    }

    #[test]
    fn test_constructor_invalid_sample_time() {
        let result = KinematicBicycle::new(BicycleParams::new(2.0, 1.2, 1.22, 0.0));
        assert!(matches!(
            result,
            Err(KinematicsError::InvalidSampleTime("must be positive"))
        ));
        let result_negative = KinematicBicycle::new(BicycleParams::new(2.0, 1.2, 1.22, -0.01));
        assert!(matches!(
            result_negative,
            Err(KinematicsError::InvalidSampleTime("must be positive"))
        ));
    }

    #[test]
    fn test_reset_matches_fresh_model() {
        let mut model = KinematicBicycle::default();
        model.set_steering_angle(0.3);
        for _ in 0..250 {
            model.step(2.5, 0.4);
        }
        assert_ne!(model.state(), BicycleState::default());

        model.reset();
        let state = model.state();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.heading, 0.0);
        assert_eq!(state.steering_angle, 0.0);
        assert_eq!(state.slip_angle, 0.0);
        assert_eq!(model.state(), KinematicBicycle::default().state());
        assert_eq!(model.params(), BicycleParams::default());
    }

    #[test]
    fn test_zero_input_leaves_pose_unchanged() {
        let mut model = KinematicBicycle::default();
        model.set_steering_angle(0.3);
        let before = model.state();
        for _ in 0..50 {
            model.step(0.0, 0.0);
        }
        let after = model.state();
        assert_eq!(after.x, before.x);
        assert_eq!(after.y, before.y);
        assert_eq!(after.heading, before.heading);
        assert_eq!(after.steering_angle, before.steering_angle);
        // Slip has settled at the pure function of the steering angle.
        let expected_slip = (1.2 * 0.3_f64.tan() / 2.0).atan();
        assert!((after.slip_angle - expected_slip).abs() < EPSILON);
    }

    #[test]
    fn test_steer_rate_clamped() {
        // |ω| above the 1.22 rad/s limit moves δ by exactly ω_max · Δt.
        let mut model = KinematicBicycle::default();
        model.step(0.0, 10.0);
        assert!((model.state().steering_angle - 1.22 * 0.01).abs() < EPSILON);

        model.reset();
        model.step(0.0, -10.0);
        assert!((model.state().steering_angle + 1.22 * 0.01).abs() < EPSILON);
    }

    #[test]
    fn test_steer_rate_below_limit_not_clamped() {
        let mut model = KinematicBicycle::default();
        model.step(0.0, 0.5);
        assert!((model.state().steering_angle - 0.5 * 0.01).abs() < EPSILON);
    }

    #[test]
    fn test_slip_angle_lags_steering_by_one_step() {
        let mut model = KinematicBicycle::default();
        model.step(0.0, 1.0);
        // The slip written during the call derives from the pre-update δ = 0.
        assert_eq!(model.state().slip_angle, 0.0);
        assert!((model.state().steering_angle - 0.01).abs() < EPSILON);

        model.step(0.0, 0.0);
        let expected = (1.2 * 0.01_f64.tan() / 2.0).atan();
        assert!((model.state().slip_angle - expected).abs() < EPSILON);
    }

    #[test]
    fn test_straight_line() {
        let mut model = KinematicBicycle::default();
        for _ in 0..1000 {
            model.step(1.5, 0.0);
        }
        // x = v · N · Δt = 1.5 · 1000 · 0.01 = 15, y exactly 0 with δ = 0.
        let state = model.state();
        assert!((state.x - 15.0).abs() < EPSILON);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.heading, 0.0);
    }

    #[test]
    fn test_straight_line_reverse() {
        let mut model = KinematicBicycle::default();
        for _ in 0..500 {
            model.step(-2.0, 0.0);
        }
        assert!((model.state().x + 10.0).abs() < EPSILON);
        assert_eq!(model.state().y, 0.0);
    }

    #[test]
    fn test_heading_accumulates_without_wraparound() {
        let mut model = KinematicBicycle::default();
        model.set_steering_angle((2.0_f64 / 10.0).atan());
        for _ in 0..3000 {
            model.step(PI, 0.0);
        }
        // 30 s at ~0.312 rad/s is well past one full revolution.
        assert!(model.state().heading > 2.0 * PI);
    }

    #[test]
    fn test_circle_with_zero_slip_override() {
        // δ = atan(L/r) = atan(2/10) and v = π close a 10 m-radius circle
        // about (0, 10) in 20 s when the slip angle is forced to zero.
        let mut model = KinematicBicycle::default();
        model.set_steering_angle((2.0_f64 / 10.0).atan());
        for _ in 0..2000 {
            let state = model.state();
            let radius = (state.x * state.x + (state.y - 10.0) * (state.y - 10.0)).sqrt();
            assert!((radius - 10.0).abs() < 0.05);
            model.step_with_slip(PI, 0.0, Some(0.0));
        }
        let end = model.state();
        assert!((end.x * end.x + end.y * end.y).sqrt() < 1e-3);
    }

    #[test]
    fn test_circle_offset_by_slip() {
        // With the slip angle live, the ring center shifts to
        // (−l_r, L / tan δ) and the radius grows to sqrt(l_r² + (L/tan δ)²).
        let delta = (2.0_f64 / 10.0).atan();
        let center_x = -1.2;
        let center_y = 2.0 / delta.tan();
        let radius = (1.2_f64 * 1.2 + center_y * center_y).sqrt();

        let mut model = KinematicBicycle::default();
        model.set_steering_angle(delta);
        for _ in 0..2000 {
            let state = model.state();
            let dist =
                ((state.x - center_x).powi(2) + (state.y - center_y).powi(2)).sqrt();
            assert!((dist - radius).abs() < 0.05);
            model.step(PI, 0.0);
        }
    }

    #[test]
    fn test_set_steering_angle_recomputes_slip() {
        let mut model = KinematicBicycle::default();
        model.set_steering_angle(0.1974);
        let expected = (1.2 * 0.1974_f64.tan() / 2.0).atan();
        assert!((model.state().slip_angle - expected).abs() < EPSILON);
    }

    #[test]
    fn test_custom_params_turn_radius() {
        // A 3 m-wheelbase vehicle at δ = atan(3/15) turns with radius 15 m.
        let params = BicycleParams::new(3.0, 1.5, 1.0, 0.01);
        let mut model = KinematicBicycle::new(params).unwrap();
        model.set_steering_angle((3.0_f64 / 15.0).atan());
        for _ in 0..1000 {
            let state = model.state();
            let radius = (state.x * state.x + (state.y - 15.0) * (state.y - 15.0)).sqrt();
            assert!((radius - 15.0).abs() < 0.05);
            model.step_with_slip(2.0, 0.0, Some(0.0));
        }
    }
}
