//! Text overlay: run status, derived quantities and key help

use crate::simulation::analysis::{describe, Derived};
use crate::simulation::engine::Simulation;
use crate::visualization::controls::HELP;

pub fn status(sim: &Simulation) -> &'static str {
    if sim.is_halted() {
        "halted (left the domain, press R)"
    } else if sim.is_playing() {
        "playing"
    } else {
        "paused"
    }
}

fn opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.2}"),
        _ => "-".to_string(),
    }
}

pub fn hud_text(sim: &Simulation) -> String {
    let p = sim.params();
    let s = sim.state();
    let d = Derived::from_params(p);

    let mut out = format!(
        "t = {:.2}   [{}]\n\
         m = {:.2}   q = {:+.2}\n\
         v0 = ({:.1}, {:.1}, {:.1})   |v| = {:.2}\n\
         B = ({:.2}, {:.2}, {:.2})   |B| = {:.2}\n\
         R = {}   T = {}\n\n\
         {}\n\n",
        s.t,
        status(sim),
        p.mass,
        p.charge,
        p.velocity.x,
        p.velocity.y,
        p.velocity.z,
        s.v.norm(),
        p.b_field.x,
        p.b_field.y,
        p.b_field.z,
        d.field_magnitude,
        opt(d.radius),
        opt(d.period),
        describe(p),
    );
    out.push_str(HELP);
    out
}
