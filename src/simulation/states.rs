//! Core state types for the particle simulation.
//!
//! - `SimulationState` holds the particle kinematics and its time `t`
//! - `Trajectory` is the bounded FIFO of past positions drawn as the trail
//!
//! All vectors use `NVec3` (nalgebra, f64).

use std::collections::VecDeque;

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Default number of positions kept in the trail
pub const HISTORY_CAPACITY: usize = 3000;

/// Bounded position history, oldest first.
/// Pushing past capacity evicts from the front.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: VecDeque<NVec3>,
    capacity: usize,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, p: NVec3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&NVec3> {
        self.points.front()
    }

    pub fn latest(&self) -> Option<&NVec3> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NVec3> {
        self.points.iter()
    }
}

impl Default for Trajectory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub history: Trajectory, // trail of past positions
    pub t: f64, // time
}

impl SimulationState {
    /// Particle at the origin with velocity `v`, empty trail, t = 0
    pub fn at_origin(v: NVec3, history_capacity: usize) -> Self {
        Self {
            x: NVec3::zeros(),
            v,
            history: Trajectory::with_capacity(history_capacity),
            t: 0.0,
        }
    }
}
