//! Tessellation of a composed `Frame` into one vertex-coloured triangle list
//!
//! The output is laid out for a Bevy 2D mesh: positions are in world units
//! of a default `Camera2d` (origin at the window centre, y up), colours are
//! linear RGBA. Triangles are emitted in shape order so later shapes paint
//! over earlier ones.

use bevy::color::{LinearRgba, Srgba};

use crate::simulation::states::NVec2;
use crate::visualization::camera::Viewport;
use crate::visualization::scene::{Frame, Shape};

/// Segments used to approximate a disk
const DISK_SEGMENTS: u32 = 24;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanvasBuffers {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

impl CanvasBuffers {
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
        self.indices.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn vertex(&mut self, p: [f32; 2], color: [f32; 4]) -> u32 {
        let i = self.positions.len() as u32;
        self.positions.push([p[0], p[1], 0.0]);
        self.colors.push(color);
        i
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }
}

/// Screen pixels (top-left origin, y down) to 2D world units (centre origin, y up)
pub fn screen_to_world(p: &NVec2, viewport: &Viewport) -> [f32; 2] {
    [
        (p.x - viewport.width / 2.0) as f32,
        (viewport.height / 2.0 - p.y) as f32,
    ]
}

fn linear(c: Srgba) -> [f32; 4] {
    let l = LinearRgba::from(c);
    [l.red, l.green, l.blue, l.alpha]
}

/// Fill `out` with the triangles for `frame`
pub fn tessellate(frame: &Frame, out: &mut CanvasBuffers) {
    out.clear();
    let vp = &frame.viewport;

    for shape in &frame.shapes {
        match shape {
            Shape::Gradient { top, bottom } => {
                let (t, b) = (linear(*top), linear(*bottom));
                let tl = out.vertex(screen_to_world(&NVec2::new(0.0, 0.0), vp), t);
                let tr = out.vertex(screen_to_world(&NVec2::new(vp.width, 0.0), vp), t);
                let br = out.vertex(screen_to_world(&NVec2::new(vp.width, vp.height), vp), b);
                let bl = out.vertex(screen_to_world(&NVec2::new(0.0, vp.height), vp), b);
                out.triangle(tl, bl, br);
                out.triangle(tl, br, tr);
            }
            Shape::Line { from, to, width, color } => {
                segment(out, vp, from, to, *width, linear(*color));
            }
            Shape::Polyline { points, width, color } => {
                let c = linear(*color);
                for pair in points.windows(2) {
                    segment(out, vp, &pair[0], &pair[1], *width, c);
                }
            }
            Shape::Triangle { a, b, c, color } => {
                let col = linear(*color);
                let ia = out.vertex(screen_to_world(a, vp), col);
                let ib = out.vertex(screen_to_world(b, vp), col);
                let ic = out.vertex(screen_to_world(c, vp), col);
                out.triangle(ia, ib, ic);
            }
            Shape::Disk { center, radius, color } => {
                if *radius <= 0.0 {
                    continue;
                }
                let col = linear(*color);
                let hub = out.vertex(screen_to_world(center, vp), col);
                let first = out.positions.len() as u32;
                for s in 0..DISK_SEGMENTS {
                    let theta = std::f64::consts::TAU * s as f64 / DISK_SEGMENTS as f64;
                    let rim = center + *radius * NVec2::new(theta.cos(), theta.sin());
                    out.vertex(screen_to_world(&rim, vp), col);
                }
                for s in 0..DISK_SEGMENTS {
                    out.triangle(hub, first + s, first + (s + 1) % DISK_SEGMENTS);
                }
            }
        }
    }
}

/// A line of `width` pixels as a quad; zero-length segments are skipped
fn segment(out: &mut CanvasBuffers, vp: &Viewport, from: &NVec2, to: &NVec2, width: f64, color: [f32; 4]) {
    let d = to - from;
    let len = d.norm();
    if len < 1e-9 || width <= 0.0 {
        return;
    }
    let n = NVec2::new(-d.y, d.x) * (width / (2.0 * len));
    let a = out.vertex(screen_to_world(&(from + n), vp), color);
    let b = out.vertex(screen_to_world(&(from - n), vp), color);
    let c = out.vertex(screen_to_world(&(to - n), vp), color);
    let e = out.vertex(screen_to_world(&(to + n), vp), color);
    out.triangle(a, b, c);
    out.triangle(a, c, e);
}
