pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{NVec2, NVec3, SimulationState, Trajectory};
pub use simulation::params::{ParamEdit, ParamError, SimulationParams};
pub use simulation::engine::{Engine, Simulation, TickOutcome};
pub use simulation::integrator::{rk4_lorentz, StepOutcome};
pub use simulation::scenario::Scenario;

pub use configuration::config::{CameraConfig, EngineConfig, FieldConfig, ParticleConfig, ScenarioConfig};

pub use visualization::camera::{clip_label_position, project, CameraState, Viewport};
pub use visualization::lfsim_vis3d::run_3d;

pub use benchmark::benchmark::{bench_frame, bench_rk4};
