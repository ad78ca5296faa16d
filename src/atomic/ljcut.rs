use super::{PairModelTrait, PairOutput};
use crate::Error;

/// Lennard-Jones 12-6 potential, truncated at `rcut` without correction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LennardJones {
    sigma: f64,
    epsilon: f64,
    rcut: f64,
    sigma2: f64,
    eps4: f64,
    eps24: f64,
}
impl LennardJones {
    pub fn new(sigma: f64, epsilon: f64, rcut: f64) -> Result<Self, Error> {
        check_parameters(sigma, epsilon, rcut)?;
        Ok(Self {
            sigma,
            epsilon,
            rcut,
            sigma2: sigma * sigma,
            eps4: 4.0 * epsilon,
            eps24: 24.0 * epsilon,
        })
    }
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl PairModelTrait for LennardJones {
    fn cutoff_distance(&self) -> f64 {
        self.rcut
    }
    // U(r) = 4 eps ((sig/r)^12 - (sig/r)^6)
    // W(r) = -r dU/dr = 24 eps (2 (sig/r)^12 - (sig/r)^6)
    #[inline]
    fn evaluate(&self, r2: f64) -> PairOutput {
        let sr2 = self.sigma2 / r2;
        let sr6 = sr2 * sr2 * sr2;
        let sr12 = sr6 * sr6;
        PairOutput {
            energy: self.eps4 * (sr12 - sr6),
            virial: self.eps24 * (sr12 + sr12 - sr6),
        }
    }
}

pub(super) fn check_parameters(sigma: f64, epsilon: f64, rcut: f64) -> Result<(), Error> {
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "sigma should be positive, found {}",
            sigma
        )));
    }
    if !(epsilon >= 0.0) || !epsilon.is_finite() {
        return Err(Error::InvalidParameters(format!(
            "epsilon should be non-negative, found {}",
            epsilon
        )));
    }
    if !(rcut > 0.0) || !rcut.is_finite() {
        return Err(Error::InvalidCutoff(rcut));
    }
    Ok(())
}
