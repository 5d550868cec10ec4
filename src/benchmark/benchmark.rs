use std::time::Instant;

use crate::simulation::engine::{Engine, Simulation};
use crate::simulation::params::SimulationParams;
use crate::simulation::states::NVec3;
use crate::simulation::integrator::{rk4_lorentz, StepOutcome, DT};
use crate::visualization::camera::{CameraState, Viewport};
use crate::visualization::canvas::{tessellate, CanvasBuffers};
use crate::visualization::scene::compose_frame;

// bounded helix that never leaves the domain
fn bench_params() -> SimulationParams {
    SimulationParams {
        mass: 1.0,
        charge: 1.0,
        velocity: NVec3::new(10.0, 0.0, 0.0),
        b_field: NVec3::new(0.0, 0.0, 0.5),
    }
}

/// RK4 steps per second for a gyrating particle
pub fn bench_rk4() {
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let params = bench_params();

    for n in ns {
        let mut sim = match Simulation::new(Engine::default(), params, true) {
            Ok(sim) => sim,
            Err(e) => {
                println!("bench_rk4: bad parameters: {e}");
                return;
            }
        };
        let engine = sim.engine.clone();

        let t0 = Instant::now();
        for _ in 0..n {
            if rk4_lorentz(sim.state_mut(), &params, engine.dt, engine.domain_limit) == StepOutcome::Halted {
                break;
            }
        }
        let secs = t0.elapsed().as_secs_f64();

        println!(
            "steps = {n:8}, time = {secs:8.6} s, {:10.0} steps/s, |v| drift = {:.3e}",
            n as f64 / secs,
            (sim.state().v.norm() - params.velocity.norm()).abs()
        );
    }
}

/// Frame composition + tessellation with a full trail
pub fn bench_frame() {
    let params = bench_params();
    let mut sim = match Simulation::new(Engine::default(), params, true) {
        Ok(sim) => sim,
        Err(e) => {
            println!("bench_frame: bad parameters: {e}");
            return;
        }
    };
    // fill the trail
    for _ in 0..sim.engine.history_capacity {
        sim.tick();
    }

    let camera = CameraState::default();
    let viewport = Viewport::new(1280.0, 800.0);
    let mut buffers = CanvasBuffers::default();
    let frames = 200;

    // Warm up
    let frame = compose_frame(sim.state(), sim.params(), &camera, &viewport);
    tessellate(&frame, &mut buffers);

    let t0 = Instant::now();
    for _ in 0..frames {
        let frame = compose_frame(sim.state(), sim.params(), &camera, &viewport);
        tessellate(&frame, &mut buffers);
    }
    let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

    println!(
        "trail = {}, dt = {DT}, frame = {ms:.3} ms, {} triangles",
        sim.state().history.len(),
        buffers.triangle_count()
    );
}
