//! Pair models and the table assigning one to every pair of atom types.
//!
//! Models form a closed set dispatched through [`PairModel`], so the force
//! loop matches on a tag instead of calling through a vtable.

pub mod ljcut;
pub mod ljsf;
pub mod none;
pub mod pair_table;

pub use ljcut::LennardJones;
pub use ljsf::ShiftedForceLennardJones;
pub use none::None_;
pub use pair_table::{PairTable, PairType};

use enum_dispatch::enum_dispatch;

/// Contribution of a single pair
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairOutput {
    pub energy: f64,
    /// `r . F = -r dU/dr`; the force on the first atom is `virial / r^2` times the separation
    pub virial: f64,
}

/// Trait for pairwise atomic potentials
#[enum_dispatch]
pub trait PairModelTrait {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    /// Energy and virial at squared distance `r2`, which the caller keeps within the cutoff
    fn evaluate(&self, r2: f64) -> PairOutput;
}

#[enum_dispatch(PairModelTrait)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PairModel {
    None_,
    LennardJones,
    ShiftedForceLennardJones,
}
impl Default for PairModel {
    fn default() -> Self {
        None_::new().into()
    }
}
