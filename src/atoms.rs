use crate::{utils::scale_and_shift, Error};

/// Largest number of atom types; the pair table holds the square of it
pub const MAX_TYPES: usize = 1024;

/// Per-atom data owned by the engine: types, positions, momenta and the
/// force accumulators written by the last force computation
#[derive(Clone, Debug)]
pub struct Atoms {
    types: Vec<usize>,
    pub(crate) positions: Vec<[f64; 3]>,
    pub(crate) momenta: Vec<[f64; 3]>,
    pub(crate) forces: Vec<[f64; 3]>,
}
impl Atoms {
    /// Atoms of the given types, all at the origin and at rest
    pub fn new(types: &[usize]) -> Result<Self, Error> {
        if types.is_empty() {
            return Err(Error::NoAtoms);
        }
        if let Some(&type_) = types.iter().find(|&&t| t >= MAX_TYPES) {
            return Err(Error::InvalidType {
                type_,
                num_types: MAX_TYPES,
            });
        }
        let num_atoms = types.len();
        Ok(Atoms {
            types: types.to_vec(),
            positions: vec![[0.0; 3]; num_atoms],
            momenta: vec![[0.0; 3]; num_atoms],
            forces: vec![[0.0; 3]; num_atoms],
        })
    }
    pub fn num_atoms(&self) -> usize {
        self.types.len()
    }
    /// One more than the largest type index
    pub fn num_types(&self) -> usize {
        self.types.iter().max().map_or(0, |t| t + 1)
    }
    pub fn types(&self) -> &[usize] {
        &self.types
    }
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }
    pub fn momenta(&self) -> &[[f64; 3]] {
        &self.momenta
    }
    pub fn forces(&self) -> &[[f64; 3]] {
        &self.forces
    }

    /// Copy positions and momenta in; nothing is copied unless both lengths match
    pub fn upload(&mut self, positions: &[[f64; 3]], momenta: &[[f64; 3]]) -> Result<(), Error> {
        self.check_len(positions.len())?;
        self.check_len(momenta.len())?;
        self.positions.copy_from_slice(positions);
        self.momenta.copy_from_slice(momenta);
        Ok(())
    }
    pub fn download(
        &self,
        positions: &mut [[f64; 3]],
        momenta: &mut [[f64; 3]],
        forces: &mut [[f64; 3]],
    ) -> Result<(), Error> {
        self.check_len(positions.len())?;
        self.check_len(momenta.len())?;
        self.check_len(forces.len())?;
        positions.copy_from_slice(&self.positions);
        momenta.copy_from_slice(&self.momenta);
        forces.copy_from_slice(&self.forces);
        Ok(())
    }
    pub fn change_coordinates(&mut self, a: f64, b: f64) {
        scale_and_shift(&mut self.positions, a, b);
    }
    pub fn change_momenta(&mut self, a: f64, b: f64) {
        scale_and_shift(&mut self.momenta, a, b);
    }
    pub(crate) fn reset_forces(&mut self) {
        self.forces.iter_mut().for_each(|f| *f = [0.0; 3]);
    }
    #[inline]
    pub(crate) fn increment_force(&mut self, i: usize, increment: [f64; 3]) {
        self.forces[i][0] += increment[0];
        self.forces[i][1] += increment[1];
        self.forces[i][2] += increment[2];
    }

    fn check_len(&self, found: usize) -> Result<(), Error> {
        if found != self.num_atoms() {
            return Err(Error::LengthMismatch {
                expected: self.num_atoms(),
                found,
            });
        }
        Ok(())
    }
}
