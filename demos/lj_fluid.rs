//! Velocity-Verlet run of a Lennard-Jones fluid, with the integrator on the host side.
//!
//! Run with `RUST_LOG=info cargo run --example lj_fluid`.

use log::info;
use pairforce::Engine;
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, Normal};

const CELLS_PER_SIDE: usize = 8;
const DENSITY: f64 = 0.8;
const TEMPERATURE: f64 = 1.5;
const TIMESTEP: f64 = 0.005;
const NUM_STEPS: usize = 500;
const PRINT_EVERY: usize = 50;

fn simple_cubic(cells_per_side: usize, a: f64) -> Vec<[f64; 3]> {
    let mut coords = Vec::with_capacity(cells_per_side.pow(3));
    for i in 0..cells_per_side {
        for j in 0..cells_per_side {
            for k in 0..cells_per_side {
                coords.push([
                    a * (i as f64 + 0.5),
                    a * (j as f64 + 0.5),
                    a * (k as f64 + 0.5),
                ]);
            }
        }
    }
    coords
}

fn kinetic_energy(momenta: &[[f64; 3]]) -> f64 {
    0.5 * momenta
        .iter()
        .map(|p| p[0] * p[0] + p[1] * p[1] + p[2] * p[2])
        .sum::<f64>()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let a = (1.0 / DENSITY).cbrt();
    let length = a * CELLS_PER_SIDE as f64;
    let mut positions = simple_cubic(CELLS_PER_SIDE, a);
    let num_atoms = positions.len();

    // unit masses, so momenta and velocities coincide
    let mut rng = StdRng::seed_from_u64(2024);
    let dist = Normal::new(0.0, TEMPERATURE.sqrt())?;
    let mut momenta: Vec<[f64; 3]> = (0..num_atoms)
        .map(|_| [0; 3].map(|_| dist.sample(&mut rng)))
        .collect();
    let mut forces = vec![[0.0; 3]; num_atoms];

    let mut engine = Engine::new(2.5, 0.3, &vec![0; num_atoms])?;
    engine.set_shifted_force_lj(0, 0, 1.0, 1.0)?;
    engine.upload(&positions, &momenta)?;

    // bring the initial kinetic energy to the target temperature
    let dof = 3.0 * num_atoms as f64;
    let current = 2.0 * kinetic_energy(engine.momenta()) / dof;
    engine.change_momenta((TEMPERATURE / current).sqrt(), 0.0);
    engine.compute_forces(length)?;
    engine.download(&mut positions, &mut momenta, &mut forces)?;

    let volume = length.powi(3);
    let half_ts = 0.5 * TIMESTEP;
    for step in 0..=NUM_STEPS {
        if step % PRINT_EVERY == 0 {
            let ke = kinetic_energy(&momenta);
            let temperature = 2.0 * ke / dof;
            let pressure = (num_atoms as f64 * temperature + engine.virial() / 3.0) / volume;
            info!(
                "step {:>5}  T {:.4}  P {:.4}  U {:.4}  E {:.6}  builds {}",
                step,
                temperature,
                pressure,
                engine.energy() / num_atoms as f64,
                (engine.energy() + ke) / num_atoms as f64,
                engine.builds()
            );
        }
        if step == NUM_STEPS {
            break;
        }

        for ((x, p), f) in positions.iter_mut().zip(momenta.iter_mut()).zip(&forces) {
            for k in 0..3 {
                p[k] += half_ts * f[k];
                x[k] += TIMESTEP * p[k];
            }
        }
        engine.upload(&positions, &momenta)?;
        engine.compute_forces(length)?;
        engine.download(&mut positions, &mut momenta, &mut forces)?;
        for (p, f) in momenta.iter_mut().zip(&forces) {
            for k in 0..3 {
                p[k] += half_ts * f[k];
            }
        }
    }
    Ok(())
}
