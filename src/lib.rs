//! Pairwise force engine for molecular dynamics in a cubic periodic box.
//!
//! The host program keeps the integrator. It hands positions and momenta
//! to an [`Engine`], asks for forces at the current box length and reads
//! forces, energy and virial back. Pairs are found through a Verlet list
//! built from a cell grid and reused until some atom has moved more than
//! half the skin.
//!
//! ```
//! use pairforce::Engine;
//!
//! let mut engine = Engine::new(2.5, 0.3, &[0, 0])?;
//! engine.set_lj(0, 0, 1.0, 1.0)?;
//! let r_min = 2f64.powf(1.0 / 6.0);
//! engine.upload(&[[1.0, 1.0, 1.0], [1.0 + r_min, 1.0, 1.0]], &[[0.0; 3]; 2])?;
//! engine.compute_forces(10.0)?;
//! assert!((engine.energy() + 1.0).abs() < 1e-12);
//! assert!(engine.forces()[0][0].abs() < 1e-12);
//! # Ok::<(), pairforce::Error>(())
//! ```

pub mod atomic;
pub mod atoms;
pub mod container;
pub mod engine;
pub mod error;
pub mod force;
pub mod neighbor;
pub mod utils;

pub use atomic::{
    LennardJones, None_, PairModel, PairModelTrait, PairTable, ShiftedForceLennardJones,
};
pub use atoms::{Atoms, MAX_TYPES};
pub use container::Container;
pub use engine::Engine;
pub use error::Error;
pub use force::Totals;
pub use neighbor::{NeighborList, UpdateSettings};
pub use utils::Types;
