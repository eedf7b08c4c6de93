// Headless driver: spawns the stock rotating-disk scenario and steps the
// simulation without any rendering. Usage:
//
//     simulate [count] [steps] [dt]

use std::error::Error;
use std::time::Instant;

use log::info;

use rs_nbody::bodies::{default_rotating_disk, Simulation};
use rs_nbody::utils::SimConstants;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let count: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(500);
    let steps: usize = args.next().map(|a| a.parse()).transpose()?.unwrap_or(1000);
    let dt: f64 = args.next().map(|a| a.parse()).transpose()?.unwrap_or(0.01);

    let constants = SimConstants::default();
    let bodies = default_rotating_disk(count, &constants)?;

    let mut sim = Simulation::new(constants);
    sim.set_bodies(bodies);
    let (px0, py0) = sim.total_momentum();
    info!("starting: {count} bodies, {steps} steps, dt = {dt}");

    let start = Instant::now();
    for _ in 0..steps {
        sim.step(dt);
    }
    let elapsed = start.elapsed();

    let (px, py) = sim.total_momentum();
    println!(
        "{count} bodies x {steps} steps in {:.3}s ({:.1} steps/s)",
        elapsed.as_secs_f64(),
        steps as f64 / elapsed.as_secs_f64()
    );
    println!(
        "momentum drift: ({:.3e}, {:.3e})",
        px - px0,
        py - py0
    );

    Ok(())
}
