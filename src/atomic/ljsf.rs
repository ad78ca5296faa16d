use super::{ljcut::LennardJones, PairModelTrait, PairOutput};
use crate::Error;

/// Lennard-Jones 12-6 potential with force and energy shifted to vanish at `rcut`.
///
/// `U_sf(r) = U(r) - U(rc) + (r - rc) F(rc)`, so `F_sf(r) = F(r) - F(rc)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftedForceLennardJones {
    lj: LennardJones,
    rcut: f64,
    energy_shift: f64,
    force_shift: f64,
}
impl ShiftedForceLennardJones {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Result<Self, Error> {
        let lj = LennardJones::new(sigma, epsilon, rcut)?;
        let at_cutoff = lj.evaluate(rcut * rcut);
        Ok(Self {
            lj,
            rcut,
            energy_shift: at_cutoff.energy,
            force_shift: at_cutoff.virial / rcut,
        })
    }
    pub fn sigma(&self) -> f64 {
        self.lj.sigma()
    }
    pub fn epsilon(&self) -> f64 {
        self.lj.epsilon()
    }
}

impl PairModelTrait for ShiftedForceLennardJones {
    fn cutoff_distance(&self) -> f64 {
        self.rcut
    }
    #[inline]
    fn evaluate(&self, r2: f64) -> PairOutput {
        let r = r2.sqrt();
        let PairOutput { energy, virial } = self.lj.evaluate(r2);
        PairOutput {
            energy: energy - self.energy_shift + (r - self.rcut) * self.force_shift,
            virial: virial - r * self.force_shift,
        }
    }
}
