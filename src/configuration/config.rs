//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`EngineConfig`]   – step size, trail capacity, domain limit, autoplay
//! - [`ParticleConfig`] – mass, charge and initial velocity
//! - [`FieldConfig`]    – the uniform magnetic field
//! - [`CameraConfig`]   – initial view angles and zoom
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:                   # optional, defaults shown
//!   dt: 0.05
//!   history_capacity: 3000
//!   domain_limit: 320.0
//!   autoplay: true
//!
//! particle:
//!   mass: 1.0
//!   charge: 1.0
//!   velocity: [12.0, 0.0, 3.0]
//!
//! field:
//!   b: [0.0, 0.0, 0.2]
//!
//! camera:                   # optional
//!   pitch: 0.45
//!   yaw: 0.6
//!   zoom: 1.0
//! ```

use serde::Deserialize;

use crate::simulation::integrator::{DOMAIN_LIMIT, DT};
use crate::simulation::states::HISTORY_CAPACITY;

/// Integration and playback settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub dt: f64, // fixed time step
    pub history_capacity: usize, // number of trail points kept
    pub domain_limit: f64, // playback halts once |x_i| exceeds this
    pub autoplay: bool, // start playing immediately
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dt: DT,
            history_capacity: HISTORY_CAPACITY,
            domain_limit: DOMAIN_LIMIT,
            autoplay: true,
        }
    }
}

/// The single charged particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub mass: f64, // must be > 0
    pub charge: f64, // sign selects the direction of gyration
    pub velocity: Vec<f64>, // initial velocity [vx, vy, vz]
}

/// Uniform, constant magnetic field
#[derive(Deserialize, Debug, Clone)]
pub struct FieldConfig {
    pub b: Vec<f64>, // [bx, by, bz]
}

/// Starting view
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraConfig {
    pub pitch: f64, // radians, clamped to [-pi/2, pi/2]
    pub yaw: f64, // radians
    pub zoom: f64, // clamped to [0.1, 5]
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pitch: 0.45,
            yaw: 0.6,
            zoom: 1.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub particle: ParticleConfig,
    pub field: FieldConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}
