//! Acceleration laws for the particle
//!
//! The field is uniform and static, so the only input an acceleration
//! needs is the velocity.

use crate::simulation::params::SimulationParams;
use crate::simulation::states::NVec3;

/// Velocity-dependent acceleration source
pub trait Acceleration {
    fn acceleration(&self, v: &NVec3) -> NVec3;
}

/// Magnetic part of the Lorentz force divided by mass:
/// a(v) = (q/m) (v x B)
#[derive(Debug, Clone, Copy)]
pub struct LorentzForce {
    pub q_over_m: f64, // charge / mass
    pub b: NVec3, // uniform field
}

impl LorentzForce {
    pub fn from_params(params: &SimulationParams) -> Self {
        Self {
            q_over_m: params.q_over_m(),
            b: params.b_field,
        }
    }
}

impl Acceleration for LorentzForce {
    fn acceleration(&self, v: &NVec3) -> NVec3 {
        self.q_over_m * v.cross(&self.b)
    }
}
