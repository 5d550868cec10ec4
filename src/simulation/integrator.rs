//! Fixed-step time integrator for the charged particle
//!
//! Classical RK4 on (x, v) with the Lorentz acceleration. The step is
//! all-or-nothing: either the whole state advances, or the bounds check
//! fails first and nothing changes.

use super::forces::{Acceleration, LorentzForce};
use super::params::SimulationParams;
use super::states::{NVec3, SimulationState};

/// Default step size
pub const DT: f64 = 0.05;

/// Half-width of the simulation box; any position component beyond it halts the run
pub const DOMAIN_LIMIT: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// State advanced by one step and the new position was recorded
    Advanced,
    /// Particle left the domain before the step; state untouched
    Halted,
}

/// True if any component of `x` is past `limit`
pub fn out_of_bounds(x: &NVec3, limit: f64) -> bool {
    x.iter().any(|c| c.abs() > limit)
}

/// Advance the particle by one RK4 step with the Lorentz force from `params`.
/// Appends the new position to `state.history` on success.
pub fn rk4_lorentz(state: &mut SimulationState, params: &SimulationParams, dt: f64, limit: f64) -> StepOutcome {
    let force = LorentzForce::from_params(params);
    rk4_step(state, &force, dt, limit)
}

/// Advance `state` by one RK4 step of size `dt` under `accel`.
/// Four acceleration evaluations per step.
pub fn rk4_step<A: Acceleration>(state: &mut SimulationState, accel: &A, dt: f64, limit: f64) -> StepOutcome {
    if out_of_bounds(&state.x, limit) {
        return StepOutcome::Halted;
    }

    let v = state.v;

    // Stage 1 at v
    let k1v = accel.acceleration(&v) * dt;
    let k1r = v * dt;

    // Stage 2 at v + k1v/2
    let v2 = v + 0.5 * k1v;
    let k2v = accel.acceleration(&v2) * dt;
    let k2r = v2 * dt;

    // Stage 3 at v + k2v/2
    let v3 = v + 0.5 * k2v;
    let k3v = accel.acceleration(&v3) * dt;
    let k3r = v3 * dt;

    // Stage 4 at v + k3v
    let v4 = v + k3v;
    let k4v = accel.acceleration(&v4) * dt;
    let k4r = v4 * dt;

    state.v = v + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) / 6.0;
    state.x += (k1r + 2.0 * k2r + 2.0 * k3r + k4r) / 6.0;
    state.t += dt;

    state.history.push(state.x);
    StepOutcome::Advanced
}
