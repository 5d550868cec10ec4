//! Derived quantities for a parameter set and a short plain-text reading of
//! the motion they produce. Purely descriptive; never touches the state.

use std::f64::consts::TAU;

use super::params::SimulationParams;
use super::states::NVec3;

/// Fields below this magnitude count as "no field"
const FIELD_EPS: f64 = 1e-9;

/// Shown when the parameters cannot be described
pub const FALLBACK_EXPLANATION: &str = "Explanation unavailable.";

#[derive(Debug, Clone, PartialEq)]
pub struct Derived {
    pub speed: f64,
    pub field_magnitude: f64,
    pub force: NVec3, // q (v x B)
    pub force_direction: Option<NVec3>, // unit vector, None when the force vanishes
    pub v_parallel: NVec3, // along B
    pub v_perpendicular: NVec3, // across B
    pub radius: Option<f64>, // cyclotron radius m|v_perp| / (|q||B|)
    pub period: Option<f64>, // 2 pi m / (|q||B|)
    pub pitch: Option<f64>, // distance along B per revolution
}

impl Derived {
    pub fn from_params(p: &SimulationParams) -> Self {
        let v = p.velocity;
        let b = p.b_field;
        let field_magnitude = b.norm();
        let force = p.charge * v.cross(&b);
        let force_norm = force.norm();
        let force_direction = (force_norm > FIELD_EPS).then(|| force / force_norm);

        let (v_parallel, v_perpendicular) = if field_magnitude > FIELD_EPS {
            let b_hat = b / field_magnitude;
            let par = v.dot(&b_hat) * b_hat;
            (par, v - par)
        } else {
            (v, NVec3::zeros())
        };

        // gyration needs both a charge and a field
        let qb = p.charge.abs() * field_magnitude;
        let gyrates = qb > FIELD_EPS && p.mass > 0.0;
        let period = gyrates.then(|| TAU * p.mass / qb);
        let radius = gyrates.then(|| p.mass * v_perpendicular.norm() / qb);
        let pitch = period.map(|t| v_parallel.norm() * t);

        Self {
            speed: v.norm(),
            field_magnitude,
            force,
            force_direction,
            v_parallel,
            v_perpendicular,
            radius,
            period,
            pitch,
        }
    }

    fn is_finite(&self) -> bool {
        self.speed.is_finite()
            && self.field_magnitude.is_finite()
            && self.force.iter().all(|c| c.is_finite())
    }
}

/// Natural-language summary of the motion for `p`
pub fn describe(p: &SimulationParams) -> String {
    let d = Derived::from_params(p);
    if !d.is_finite() || p.validate().is_err() {
        return FALLBACK_EXPLANATION.to_string();
    }
    if d.speed < FIELD_EPS {
        return "The particle starts at rest; a magnetic field does no work, so it stays put.".to_string();
    }

    let (Some(radius), Some(period)) = (d.radius, d.period) else {
        let why = if p.charge == 0.0 { "it carries no charge" } else { "there is no field" };
        return format!(
            "Straight line at {:.2} units/s: {why}, so no magnetic force acts.",
            d.speed
        );
    };

    let sense = if p.charge > 0.0 { "clockwise" } else { "counter-clockwise" };
    let par = d.v_parallel.norm();
    if d.v_perpendicular.norm() < FIELD_EPS {
        return format!(
            "Straight line along the field at {:.2} units/s: velocity is parallel to B, so v x B vanishes.",
            d.speed
        );
    }
    if par < FIELD_EPS {
        format!(
            "Circle of radius {radius:.2} traversed {sense} (seen from the tip of B) every {period:.2} s; \
             |B| = {:.2}, speed {:.2} is conserved.",
            d.field_magnitude, d.speed
        )
    } else {
        format!(
            "Helix of radius {radius:.2} and pitch {:.2}, {sense} about B with period {period:.2} s; \
             {:.2} units/s drift along the field.",
            d.pitch.unwrap_or(0.0),
            par
        )
    }
}
