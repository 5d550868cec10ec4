//! Keyboard bindings for playback and live parameter edits
//!
//! | key   | action                         |
//! |-------|--------------------------------|
//! | Space | play / pause                   |
//! | R     | reset                          |
//! | C     | charge +0.5                    |
//! | M     | mass +0.5                      |
//! | X Y Z | field component +0.25          |
//! | 1 2 3 | velocity component +1 (resets) |
//!
//! Holding Shift reverses the direction of an edit.

use bevy::input::keyboard::KeyCode;

use crate::simulation::params::{Axis, ParamEdit, ParamTarget};

const CHARGE_STEP: f64 = 0.5;
const MASS_STEP: f64 = 0.5;
const FIELD_STEP: f64 = 0.25;
const VELOCITY_STEP: f64 = 1.0;

pub const HELP: &str = "Space play/pause  R reset  drag rotate  wheel zoom\n\
C charge  M mass  X/Y/Z field  1/2/3 velocity  (Shift: decrease)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    TogglePlay,
    Reset,
    Edit(ParamEdit),
}

/// Command bound to `key`, if any
pub fn command_for_key(key: KeyCode, shift: bool) -> Option<Command> {
    let sign = if shift { -1.0 } else { 1.0 };
    let edit = |target: ParamTarget, step: f64| Some(Command::Edit(ParamEdit { target, delta: sign * step }));

    match key {
        KeyCode::Space => Some(Command::TogglePlay),
        KeyCode::KeyR => Some(Command::Reset),
        KeyCode::KeyC => edit(ParamTarget::Charge, CHARGE_STEP),
        KeyCode::KeyM => edit(ParamTarget::Mass, MASS_STEP),
        KeyCode::KeyX => edit(ParamTarget::Field(Axis::X), FIELD_STEP),
        KeyCode::KeyY => edit(ParamTarget::Field(Axis::Y), FIELD_STEP),
        KeyCode::KeyZ => edit(ParamTarget::Field(Axis::Z), FIELD_STEP),
        KeyCode::Digit1 => edit(ParamTarget::Velocity(Axis::X), VELOCITY_STEP),
        KeyCode::Digit2 => edit(ParamTarget::Velocity(Axis::Y), VELOCITY_STEP),
        KeyCode::Digit3 => edit(ParamTarget::Velocity(Axis::Z), VELOCITY_STEP),
        _ => None,
    }
}
