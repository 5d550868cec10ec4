//! Physical parameters of the particle and the field
//!
//! `SimulationParams` is owned by the parameter source (keyboard controls,
//! scenario file) and read by the engine once per frame. `ParamEdit` is the
//! unit of change coming from the controls; every edit is clamped to the
//! control ranges and validated before it can reach the integrator.

use thiserror::Error;

use super::states::NVec3;

/// Control ranges for live edits
pub const CHARGE_RANGE: (f64, f64) = (-5.0, 5.0);
pub const MASS_RANGE: (f64, f64) = (0.1, 10.0);
pub const FIELD_RANGE: (f64, f64) = (-5.0, 5.0);
pub const VELOCITY_RANGE: (f64, f64) = (-20.0, 20.0);

#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("{0} must be finite")]
    NonFinite(&'static str),

    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f64),

    #[error("domain limit must be in (0, 320], got {0}")]
    InvalidDomainLimit(f64),

    #[error("history capacity must be in 1..=3000, got {0}")]
    InvalidHistoryCapacity(usize),

    #[error("expected 3 components for {name}, got {len}")]
    BadVectorLength { name: &'static str, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub mass: f64, // particle mass, > 0
    pub charge: f64, // particle charge, sign selects the force direction
    pub velocity: NVec3, // initial velocity, a change resets the run
    pub b_field: NVec3, // uniform magnetic field
}

impl SimulationParams {
    /// Reject anything the integrator cannot take
    pub fn validate(&self) -> Result<(), ParamError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ParamError::NonPositiveMass(self.mass));
        }
        if !self.charge.is_finite() {
            return Err(ParamError::NonFinite("charge"));
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(ParamError::NonFinite("velocity"));
        }
        if !self.b_field.iter().all(|c| c.is_finite()) {
            return Err(ParamError::NonFinite("magnetic field"));
        }
        Ok(())
    }

    /// Charge-to-mass ratio q/m
    pub fn q_over_m(&self) -> f64 {
        self.charge / self.mass
    }

    /// Apply one control edit, clamped to the control ranges.
    /// Returns the edited copy; `self` is left alone if the result is invalid.
    pub fn apply(&self, edit: ParamEdit) -> Result<Self, ParamError> {
        let mut next = *self;
        match edit.target {
            ParamTarget::Charge => {
                next.charge = clamp(next.charge + edit.delta, CHARGE_RANGE);
            }
            ParamTarget::Mass => {
                next.mass = clamp(next.mass + edit.delta, MASS_RANGE);
            }
            ParamTarget::Field(axis) => {
                let c = next.b_field[axis.index()] + edit.delta;
                next.b_field[axis.index()] = clamp(c, FIELD_RANGE);
            }
            ParamTarget::Velocity(axis) => {
                let c = next.velocity[axis.index()] + edit.delta;
                next.velocity[axis.index()] = clamp(c, VELOCITY_RANGE);
            }
        }
        next.validate()?;
        Ok(next)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            charge: 1.0,
            velocity: NVec3::new(12.0, 0.0, 3.0),
            b_field: NVec3::new(0.0, 0.0, 0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamTarget {
    Charge,
    Mass,
    Field(Axis),
    Velocity(Axis),
}

/// Additive change to one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamEdit {
    pub target: ParamTarget,
    pub delta: f64,
}

fn clamp(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.clamp(lo, hi)
}
