//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - the running `Simulation` (engine settings, parameters, particle state)
//! - the initial `CameraState`
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and rendering systems

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::{Engine, Simulation};
use crate::simulation::params::{ParamError, SimulationParams};
use crate::simulation::states::NVec3;
use crate::visualization::camera::CameraState;

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub simulation: Simulation,
    pub camera: CameraState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ParamError> {
        // Parameters (runtime) from ParticleConfig and FieldConfig
        let params = SimulationParams {
            mass: cfg.particle.mass,
            charge: cfg.particle.charge,
            velocity: vec3("particle.velocity", &cfg.particle.velocity)?,
            b_field: vec3("field.b", &cfg.field.b)?,
        };

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            dt: e_cfg.dt,
            history_capacity: e_cfg.history_capacity,
            domain_limit: e_cfg.domain_limit,
        };

        let simulation = Simulation::new(engine, params, e_cfg.autoplay)?;
        let camera = CameraState::new(cfg.camera.pitch, cfg.camera.yaw, cfg.camera.zoom);

        Ok(Self { simulation, camera })
    }
}

// map a YAML list onto a 3-vector
fn vec3(name: &'static str, xs: &[f64]) -> Result<NVec3, ParamError> {
    match xs {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ParamError::BadVectorLength { name, len: xs.len() }),
    }
}
