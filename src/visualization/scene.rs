//! Frame composition
//!
//! Turns the simulation state, parameters and camera into a flat, ordered
//! list of 2D shapes in screen space. Later shapes paint over earlier ones.
//! Nothing here can fail: geometry that would be degenerate or non-finite
//! is dropped instead of drawn.

use std::f64::consts::PI;

use bevy::color::Srgba;

use crate::simulation::params::SimulationParams;
use crate::simulation::states::{NVec2, NVec3, SimulationState};
use crate::visualization::camera::{clip_line, clip_label_position, project, CameraState, Viewport};

// Background gradient, top to bottom
pub const BG_TOP: Srgba = Srgba::new(0.05, 0.06, 0.11, 1.0);
pub const BG_BOTTOM: Srgba = Srgba::new(0.01, 0.01, 0.03, 1.0);

pub const AXIS_X: Srgba = Srgba::new(0.94, 0.33, 0.31, 0.8);
pub const AXIS_Y: Srgba = Srgba::new(0.40, 0.85, 0.45, 0.8);
pub const AXIS_Z: Srgba = Srgba::new(0.35, 0.55, 1.00, 0.8);

pub const FIELD_ARROW: Srgba = Srgba::new(0.55, 0.65, 0.95, 0.18);
pub const TRAIL: Srgba = Srgba::new(1.00, 0.78, 0.25, 0.9);
pub const VELOCITY_ARROW: Srgba = Srgba::new(0.30, 0.95, 0.85, 1.0);

pub const POSITIVE_CHARGE: Srgba = Srgba::new(1.00, 0.35, 0.35, 1.0);
pub const NEGATIVE_CHARGE: Srgba = Srgba::new(0.35, 0.60, 1.00, 1.0);
pub const NEUTRAL_CHARGE: Srgba = Srgba::new(0.75, 0.75, 0.75, 1.0);

/// Field lattice: GRID_HALF points each side of the origin per axis
const GRID_HALF: i32 = 4;
pub const GRID_SPACING: f64 = 120.0;
/// World length of each field arrow
const FIELD_ARROW_LENGTH: f64 = 40.0;
/// Below this |B| no lattice is drawn
pub const MIN_FIELD_FOR_GRID: f64 = 0.1;

/// World distance from the origin to the point that fixes an axis direction
const AXIS_TIP: f64 = 100.0;

const ARROW_HEAD_SPREAD: f64 = PI / 12.0;
/// Pixels past the viewport an endpoint may lie before an arrow is culled
const CULL_MARGIN: f64 = 50.0;

const TRAIL_WIDTH: f64 = 2.0;
const AXIS_WIDTH: f64 = 1.5;
const PARTICLE_RADIUS: f64 = 6.0;
const VELOCITY_ARROW_SCALE: f64 = 0.6;

/// Vectors shorter than this are not drawn
const DEGENERATE_EPS: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Full-viewport vertical gradient
    Gradient { top: Srgba, bottom: Srgba },
    Line { from: NVec2, to: NVec2, width: f64, color: Srgba },
    Polyline { points: Vec<NVec2>, width: f64, color: Srgba },
    Triangle { a: NVec2, b: NVec2, c: NVec2, color: Srgba },
    Disk { center: NVec2, radius: f64, color: Srgba },
}

/// Text drawn on top of all shapes
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub at: NVec2,
    pub color: Srgba,
}

/// Style of one 3D arrow
#[derive(Debug, Clone, Copy)]
pub struct ArrowStyle {
    pub color: Srgba,
    pub width: f64, // shaft width in px at scale 1
    pub head: f64, // head length in px at scale 1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            labels: Vec::new(),
        }
    }

    fn push(&mut self, shape: Shape) {
        if shape_is_finite(&shape) {
            self.shapes.push(shape);
        }
    }
}

/// Compose one complete frame, back to front
pub fn compose_frame(state: &SimulationState, params: &SimulationParams, camera: &CameraState, viewport: &Viewport) -> Frame {
    let mut frame = Frame::new(*viewport);

    frame.push(Shape::Gradient {
        top: BG_TOP,
        bottom: BG_BOTTOM,
    });

    draw_axes(&mut frame, camera);
    draw_field_grid(&mut frame, &params.b_field, camera);
    draw_trajectory(&mut frame, state, camera);
    draw_particle(&mut frame, state, params, camera);

    // velocity last so it sits on top of the particle
    let tip = state.x + state.v * VELOCITY_ARROW_SCALE;
    draw_arrow_3d(
        &mut frame,
        &state.x,
        &tip,
        camera,
        ArrowStyle {
            color: VELOCITY_ARROW,
            width: 2.0,
            head: 8.0,
        },
    );

    frame
}

/// Three infinite axes, each clipped to the viewport, with a label where
/// the positive half leaves the padded rectangle
fn draw_axes(frame: &mut Frame, camera: &CameraState) {
    let viewport = frame.viewport;
    let origin = NVec3::zeros();
    let axes = [
        (NVec3::new(AXIS_TIP, 0.0, 0.0), AXIS_X, "X"),
        (NVec3::new(0.0, AXIS_TIP, 0.0), AXIS_Y, "Y"),
        (NVec3::new(0.0, 0.0, AXIS_TIP), AXIS_Z, "Z"),
    ];

    let rect_min = NVec2::zeros();
    let rect_max = NVec2::new(viewport.width, viewport.height);
    let p0 = project(&origin, camera, &viewport).pos();

    for (tip, color, text) in axes {
        let p1 = project(&tip, camera, &viewport).pos();

        if let Some((t0, t1)) = clip_line(&p0, &p1, &rect_min, &rect_max) {
            let d = p1 - p0;
            frame.push(Shape::Line {
                from: p0 + t0 * d,
                to: p0 + t1 * d,
                width: AXIS_WIDTH,
                color,
            });
        }

        if let Some(at) = clip_label_position(&origin, &tip, camera, &viewport) {
            frame.labels.push(Label { text, at, color });
        }
    }
}

/// Lattice of arrows sampling the uniform field, fixed in world space
fn draw_field_grid(frame: &mut Frame, b: &NVec3, camera: &CameraState) {
    let magnitude = b.norm();
    if !(magnitude >= MIN_FIELD_FOR_GRID) {
        return;
    }
    let half = (b / magnitude) * (FIELD_ARROW_LENGTH / 2.0);
    let style = ArrowStyle {
        color: FIELD_ARROW,
        width: 1.0,
        head: 5.0,
    };

    for i in -GRID_HALF..=GRID_HALF {
        for j in -GRID_HALF..=GRID_HALF {
            for k in -GRID_HALF..=GRID_HALF {
                let c = NVec3::new(i as f64, j as f64, k as f64) * GRID_SPACING;
                draw_arrow_3d(frame, &(c - half), &(c + half), camera, style);
            }
        }
    }
}

/// The whole trail as one path
fn draw_trajectory(frame: &mut Frame, state: &SimulationState, camera: &CameraState) {
    let viewport = frame.viewport;
    let points: Vec<NVec2> = state
        .history
        .iter()
        .map(|p| project(p, camera, &viewport).pos())
        .filter(|p| p.x.is_finite() && p.y.is_finite())
        .collect();
    if points.len() < 2 {
        return;
    }
    frame.push(Shape::Polyline {
        points,
        width: TRAIL_WIDTH,
        color: TRAIL,
    });
}

pub fn charge_color(charge: f64) -> Srgba {
    if charge > 0.0 {
        POSITIVE_CHARGE
    } else if charge < 0.0 {
        NEGATIVE_CHARGE
    } else {
        NEUTRAL_CHARGE
    }
}

fn draw_particle(frame: &mut Frame, state: &SimulationState, params: &SimulationParams, camera: &CameraState) {
    let sp = project(&state.x, camera, &frame.viewport);
    frame.push(Shape::Disk {
        center: sp.pos(),
        radius: PARTICLE_RADIUS * sp.scale,
        color: charge_color(params.charge),
    });
}

/// Arrow from `from` to `to` in world space: a shaft line plus a filled head.
/// Skipped when both ends are off screen or the arrow has no length.
/// Returns true if anything was drawn.
pub fn draw_arrow_3d(frame: &mut Frame, from: &NVec3, to: &NVec3, camera: &CameraState, style: ArrowStyle) -> bool {
    if (to - from).norm() < DEGENERATE_EPS {
        return false;
    }

    let viewport = frame.viewport;
    let a = project(from, camera, &viewport);
    let b = project(to, camera, &viewport);
    let (pa, pb) = (a.pos(), b.pos());

    if !viewport.contains(&pa, CULL_MARGIN) && !viewport.contains(&pb, CULL_MARGIN) {
        return false;
    }

    let d = pb - pa;
    let len = d.norm();
    if !(len >= DEGENERATE_EPS) {
        return false;
    }

    frame.push(Shape::Line {
        from: pa,
        to: pb,
        width: style.width * a.scale,
        color: style.color,
    });

    let angle = d.y.atan2(d.x);
    let head = style.head * b.scale;
    let corner = |spread: f64| pb - head * NVec2::new((angle + spread).cos(), (angle + spread).sin());
    frame.push(Shape::Triangle {
        a: pb,
        b: corner(ARROW_HEAD_SPREAD),
        c: corner(-ARROW_HEAD_SPREAD),
        color: style.color,
    });
    true
}

fn finite(p: &NVec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn shape_is_finite(shape: &Shape) -> bool {
    match shape {
        Shape::Gradient { .. } => true,
        Shape::Line { from, to, width, .. } => finite(from) && finite(to) && width.is_finite(),
        Shape::Polyline { points, width, .. } => points.iter().all(finite) && width.is_finite(),
        Shape::Triangle { a, b, c, .. } => finite(a) && finite(b) && finite(c),
        Shape::Disk { center, radius, .. } => finite(center) && radius.is_finite(),
    }
}
