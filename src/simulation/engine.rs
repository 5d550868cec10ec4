//! Runtime engine: settings plus the playback-driven simulation
//!
//! `Engine` carries the step size, trail capacity and domain limit.
//! `Simulation` owns the particle state and decides, once per frame, whether
//! to step, how to react to parameter changes and when to stop.

use super::integrator::{rk4_lorentz, StepOutcome, DOMAIN_LIMIT, DT};
use super::params::{ParamError, SimulationParams};
use super::states::{SimulationState, HISTORY_CAPACITY};

#[derive(Debug, Clone)]
pub struct Engine {
    pub dt: f64, // fixed step size
    pub history_capacity: usize, // trail length
    pub domain_limit: f64, // halt when |x_i| exceeds this
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            dt: DT,
            history_capacity: HISTORY_CAPACITY,
            domain_limit: DOMAIN_LIMIT,
        }
    }
}

/// What happened during one frame tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing was integrated
    Idle,
    /// One step was taken
    Stepped,
    /// Bounds check failed; playback has been stopped
    Halted,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    pub engine: Engine,
    state: SimulationState,
    params: SimulationParams,
    playing: bool,
    halted: bool,
}

impl Simulation {
    pub fn new(engine: Engine, params: SimulationParams, playing: bool) -> Result<Self, ParamError> {
        params.validate()?;
        if !engine.dt.is_finite() || engine.dt <= 0.0 {
            return Err(ParamError::InvalidStep(engine.dt));
        }
        // NaN never compares greater, so it would switch the halt off
        if !(engine.domain_limit > 0.0 && engine.domain_limit <= DOMAIN_LIMIT) {
            return Err(ParamError::InvalidDomainLimit(engine.domain_limit));
        }
        if !(1..=HISTORY_CAPACITY).contains(&engine.history_capacity) {
            return Err(ParamError::InvalidHistoryCapacity(engine.history_capacity));
        }
        let state = SimulationState::at_origin(params.velocity, engine.history_capacity);
        Ok(Self {
            engine,
            state,
            params,
            playing,
            halted: false,
        })
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Direct access for scripted setups (benchmarks, tests)
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True from a halt until the next reset
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Back to the origin with the current parameter velocity
    pub fn reset(&mut self) {
        self.state = SimulationState::at_origin(self.params.velocity, self.engine.history_capacity);
        self.halted = false;
    }

    /// Take the latest parameters from the parameter source.
    /// A new velocity restarts the run; mass, charge and field apply in place.
    /// Returns true if the run was reset.
    pub fn sync_params(&mut self, params: &SimulationParams) -> Result<bool, ParamError> {
        params.validate()?;
        let velocity_changed = params.velocity != self.params.velocity;
        self.params = *params;
        if velocity_changed {
            let v = params.velocity;
            log::info!("velocity changed to ({:.2}, {:.2}, {:.2}), restarting run", v.x, v.y, v.z);
            self.reset();
        }
        Ok(velocity_changed)
    }

    /// One frame of the loop: a single step if playing
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playing {
            return TickOutcome::Idle;
        }
        match rk4_lorentz(&mut self.state, &self.params, self.engine.dt, self.engine.domain_limit) {
            StepOutcome::Advanced => TickOutcome::Stepped,
            StepOutcome::Halted => {
                self.playing = false;
                self.halted = true;
                log::warn!(
                    "particle left the domain (|x_i| > {}) at t = {:.2}, playback stopped",
                    self.engine.domain_limit,
                    self.state.t
                );
                TickOutcome::Halted
            }
        }
    }
}
