//! Orbit camera and the world → screen projection
//!
//! World space is z-up. The camera yaws about z, then pitches about the
//! rotated x axis; view-space y is depth. Screen space is in pixels with
//! the origin at the top-left corner and y pointing down.

use std::f64::consts::FRAC_PI_2;

use crate::simulation::states::{NVec2, NVec3};

/// Distance from the camera to the world origin along the view axis
pub const CAMERA_DISTANCE: f64 = 400.0;

/// Focal length in pixels
pub const FOV: f64 = 600.0;

/// Horizontal shift of the scene centre, leaves room for the HUD
pub const SCREEN_OFFSET_X: f64 = 100.0;

/// Inset of the label rectangle from the viewport edges
pub const LABEL_PADDING: f64 = 25.0;

pub const ZOOM_MIN: f64 = 0.1;
pub const ZOOM_MAX: f64 = 5.0;

/// Radians of rotation per dragged pixel
const DRAG_SENSITIVITY: f64 = 0.01;

/// Zoom factor per wheel notch
const WHEEL_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pitch: f64,
    yaw: f64,
    zoom: f64,
}

impl CameraState {
    pub fn new(pitch: f64, yaw: f64, zoom: f64) -> Self {
        Self {
            pitch: clamp_pitch(pitch),
            yaw,
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Pointer drag by (dx, dy) pixels
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch = clamp_pitch(self.pitch + dy * DRAG_SENSITIVITY);
    }

    /// Wheel by `notches`; positive zooms in
    pub fn wheel(&mut self, notches: f64) {
        self.zoom = clamp_zoom(self.zoom * (1.0 + WHEEL_STEP * notches));
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(0.45, 0.6, 1.0)
    }
}

fn clamp_pitch(p: f64) -> f64 {
    if p.is_finite() { p.clamp(-FRAC_PI_2, FRAC_PI_2) } else { 0.0 }
}

fn clamp_zoom(z: f64) -> f64 {
    if z.is_finite() { z.clamp(ZOOM_MIN, ZOOM_MAX) } else { 1.0 }
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Screen position the world origin projects to
    pub fn center(&self) -> NVec2 {
        NVec2::new(self.width / 2.0 - SCREEN_OFFSET_X, self.height / 2.0)
    }

    /// True if `p` lies within the viewport grown by `margin` on every side
    pub fn contains(&self, p: &NVec2, margin: f64) -> bool {
        p.x >= -margin && p.x <= self.width + margin && p.y >= -margin && p.y <= self.height + margin
    }
}

/// Projected point: pixel position plus the perspective scale at its depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl ScreenPoint {
    pub fn pos(&self) -> NVec2 {
        NVec2::new(self.x, self.y)
    }
}

/// Rotate `p` into view space: yaw about z, then pitch about x.
/// Returns (view_x, depth, view_z).
pub fn to_view(p: &NVec3, camera: &CameraState) -> NVec3 {
    let (sy, cy) = camera.yaw.sin_cos();
    let x1 = p.x * cy - p.y * sy;
    let y1 = p.x * sy + p.y * cy;
    let z1 = p.z;

    let (sp, cp) = camera.pitch.sin_cos();
    let y2 = y1 * cp - z1 * sp;
    let z2 = y1 * sp + z1 * cp;

    NVec3::new(x1, y2, z2)
}

/// Perspective projection of a world point onto the viewport
pub fn project(p: &NVec3, camera: &CameraState, viewport: &Viewport) -> ScreenPoint {
    let view = to_view(p, camera);
    let depth = (CAMERA_DISTANCE + view.y).max(1.0);
    let scale = FOV / depth * camera.zoom;
    ScreenPoint {
        x: view.x * scale + viewport.width / 2.0 - SCREEN_OFFSET_X,
        y: -view.z * scale + viewport.height / 2.0,
        scale,
    }
}

/// Liang–Barsky clip of the infinite line through `p0` and `p1` against the
/// rectangle [min, max]. Returns the entry and exit parameters (t0, t1) with
/// `p(t) = p0 + t (p1 - p0)`, or `None` if the line misses the rectangle.
pub fn clip_line(p0: &NVec2, p1: &NVec2, min: &NVec2, max: &NVec2) -> Option<(f64, f64)> {
    let d = p1 - p0;
    if !(d.x.is_finite() && d.y.is_finite()) || d.norm_squared() < 1e-12 {
        return None;
    }

    let mut t0 = f64::NEG_INFINITY;
    let mut t1 = f64::INFINITY;

    // (p, q) per edge: left, right, top, bottom
    let edges = [
        (-d.x, p0.x - min.x),
        (d.x, max.x - p0.x),
        (-d.y, p0.y - min.y),
        (d.y, max.y - p0.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge; outside means no intersection at all
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
    }

    if t0 > t1 || !t0.is_finite() || !t1.is_finite() {
        return None;
    }
    Some((t0, t1))
}

/// The visible rectangle labels are pinned to
pub fn label_rect(viewport: &Viewport) -> (NVec2, NVec2) {
    (
        NVec2::new(LABEL_PADDING, LABEL_PADDING),
        NVec2::new(viewport.width - LABEL_PADDING, viewport.height - LABEL_PADDING),
    )
}

/// Where the infinite axis through `origin` and `tip` leaves the padded
/// viewport on the tip side, or `None` if it never crosses it
pub fn clip_label_position(origin: &NVec3, tip: &NVec3, camera: &CameraState, viewport: &Viewport) -> Option<NVec2> {
    let p0 = project(origin, camera, viewport).pos();
    let p1 = project(tip, camera, viewport).pos();
    let (min, max) = label_rect(viewport);
    let (_, t1) = clip_line(&p0, &p1, &min, &max)?;
    Some(p0 + t1 * (p1 - p0))
}
