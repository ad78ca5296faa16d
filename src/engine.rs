use log::info;

use crate::{
    atomic::{LennardJones, PairModel, PairTable, ShiftedForceLennardJones},
    force::{self, Totals},
    neighbor::{Grid, UpdateSettings},
    utils::Types,
    Atoms, Container, Error, NeighborList,
};

/// Pairwise force engine for a set of atoms in a cubic periodic box.
///
/// The host uploads positions and momenta, asks for forces at a given box
/// length and downloads the results. Dropping the engine releases every
/// buffer it owns.
#[derive(Debug)]
pub struct Engine {
    atoms: Atoms,
    pair_table: PairTable,
    neighbor_list: NeighborList,
    totals: Totals,
}
impl Engine {
    /// Create an engine for `types.len()` atoms, with default neighbor list settings
    pub fn new(cutoff: f64, skin: f64, types: &[usize]) -> Result<Self, Error> {
        Self::with_settings(cutoff, skin, types, UpdateSettings::new())
    }

    pub fn with_settings(
        cutoff: f64,
        skin: f64,
        types: &[usize],
        settings: UpdateSettings,
    ) -> Result<Self, Error> {
        if !(cutoff > 0.0) || !cutoff.is_finite() {
            return Err(Error::InvalidCutoff(cutoff));
        }
        if !(skin >= 0.0) || !skin.is_finite() {
            return Err(Error::NegativeSkin(skin));
        }
        settings.validate()?;
        let atoms = Atoms::new(types)?;
        let pair_table = PairTable::new(atoms.num_types(), cutoff);
        let neighbor_list = NeighborList::new(atoms.num_atoms(), cutoff, skin, settings);
        info!(
            "Engine created: {} atoms of {} types, cutoff {}, skin {}",
            atoms.num_atoms(),
            atoms.num_types(),
            cutoff,
            skin
        );
        Ok(Self {
            atoms,
            pair_table,
            neighbor_list,
            totals: Totals::default(),
        })
    }

    // Getters
    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }
    pub fn pair_table(&self) -> &PairTable {
        &self.pair_table
    }
    pub fn neighbor_list(&self) -> &NeighborList {
        &self.neighbor_list
    }
    pub fn num_atoms(&self) -> usize {
        self.atoms.num_atoms()
    }
    pub fn num_types(&self) -> usize {
        self.pair_table.num_types()
    }
    pub fn types(&self) -> &[usize] {
        self.atoms.types()
    }
    pub fn positions(&self) -> &[[f64; 3]] {
        self.atoms.positions()
    }
    pub fn momenta(&self) -> &[[f64; 3]] {
        self.atoms.momenta()
    }
    pub fn forces(&self) -> &[[f64; 3]] {
        self.atoms.forces()
    }
    pub fn cutoff(&self) -> f64 {
        self.neighbor_list.force_distance()
    }
    pub fn skin(&self) -> f64 {
        self.neighbor_list.skin_distance()
    }
    /// Total potential energy from the last force computation
    pub fn energy(&self) -> f64 {
        self.totals.energy
    }
    /// Sum of `r_ij . F_ij` over all pairs from the last force computation
    pub fn virial(&self) -> f64 {
        self.totals.virial
    }
    /// Number of neighbor list builds so far
    pub fn builds(&self) -> usize {
        self.neighbor_list.builds()
    }
    pub fn num_pairs(&self) -> usize {
        self.neighbor_list.num_pairs()
    }
    pub fn cells_per_side(&self) -> usize {
        self.neighbor_list.grid().mcells()
    }

    // Setters

    /// Lennard-Jones between two types, truncated at the engine cutoff
    pub fn set_lj(
        &mut self,
        type_i: usize,
        type_j: usize,
        sigma: f64,
        epsilon: f64,
    ) -> Result<(), Error> {
        let model = LennardJones::new(sigma, epsilon, self.cutoff())?;
        self.set_pair(type_i, type_j, model.into())
    }
    /// Shifted-force Lennard-Jones between two types, vanishing at the engine cutoff
    pub fn set_shifted_force_lj(
        &mut self,
        type_i: usize,
        type_j: usize,
        sigma: f64,
        epsilon: f64,
    ) -> Result<(), Error> {
        let model = ShiftedForceLennardJones::new(sigma, epsilon, self.cutoff())?;
        self.set_pair(type_i, type_j, model.into())
    }
    /// Any model, whose cutoff may be shorter than the engine cutoff
    pub fn set_pair(
        &mut self,
        type_i: usize,
        type_j: usize,
        model: PairModel,
    ) -> Result<(), Error> {
        self.set_pairs(type_i.into(), type_j.into(), model)
    }
    /// Same model for every pair drawn from `itypes` and `jtypes`
    pub fn set_pairs(
        &mut self,
        itypes: Types,
        jtypes: Types,
        model: PairModel,
    ) -> Result<(), Error> {
        self.pair_table.set(itypes, jtypes, model)
    }

    // Host data exchange
    pub fn upload(&mut self, positions: &[[f64; 3]], momenta: &[[f64; 3]]) -> Result<(), Error> {
        self.atoms.upload(positions, momenta)
    }
    pub fn download(
        &self,
        positions: &mut [[f64; 3]],
        momenta: &mut [[f64; 3]],
        forces: &mut [[f64; 3]],
    ) -> Result<(), Error> {
        self.atoms.download(positions, momenta, forces)
    }
    /// `x <- a * x + b` for every position component
    pub fn change_coordinates(&mut self, a: f64, b: f64) {
        self.atoms.change_coordinates(a, b);
    }
    /// `p <- a * p + b` for every momentum component
    pub fn change_momenta(&mut self, a: f64, b: f64) {
        self.atoms.change_momenta(a, b);
    }

    /// Forces, energy and virial for a cubic box of edge `length`.
    ///
    /// Fails without touching any state if the box cannot hold the extended cutoff.
    pub fn compute_forces(&mut self, length: f64) -> Result<(), Error> {
        let container = Container::cubic(length, self.neighbor_list.cutoff_distance())?;
        self.totals = force::compute_forces(
            &mut self.atoms,
            &self.pair_table,
            &mut self.neighbor_list,
            &container,
        );
        Ok(())
    }

    /// Cells per side a box of edge `length` would be split into
    pub fn cells_per_side_for(&self, length: f64) -> usize {
        Grid::cells_per_side(length, self.neighbor_list.cutoff_distance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(Engine::new(2.5, 0.3, &[]).unwrap_err(), Error::NoAtoms);
        assert_eq!(
            Engine::new(2.5, -0.1, &[0]).unwrap_err(),
            Error::NegativeSkin(-0.1)
        );
        assert_eq!(
            Engine::new(0.0, 0.3, &[0]).unwrap_err(),
            Error::InvalidCutoff(0.0)
        );
        let settings = UpdateSettings {
            growth_factor: 0.5,
            ..UpdateSettings::new()
        };
        assert!(Engine::with_settings(2.5, 0.3, &[0], settings).is_err());
        assert!(matches!(
            Engine::new(2.5, 0.3, &[0, usize::MAX]),
            Err(Error::InvalidType { .. })
        ));
    }

    #[test]
    fn box_too_small_leaves_state_intact() {
        let mut engine = Engine::new(2.5, 0.5, &[0, 0]).unwrap();
        engine.set_lj(0, 0, 1.0, 1.0).unwrap();
        engine
            .upload(&[[1.0, 1.0, 1.0], [2.2, 1.0, 1.0]], &[[0.0; 3]; 2])
            .unwrap();
        engine.compute_forces(10.0).unwrap();
        let energy = engine.energy();
        let forces = engine.forces().to_vec();

        assert_eq!(
            engine.compute_forces(3.0),
            Err(Error::BoxTooSmall {
                length: 3.0,
                extended_cutoff: 3.0
            })
        );
        assert_eq!(engine.energy(), energy);
        assert_eq!(engine.forces(), &forces[..]);
        assert_eq!(engine.builds(), 1);

        engine.compute_forces(10.0).unwrap();
        assert_eq!(engine.builds(), 1);
    }

    #[test]
    fn pair_parameters_validated() {
        let mut engine = Engine::new(2.5, 0.3, &[0, 1, 1]).unwrap();
        assert_eq!(engine.num_types(), 2);
        assert!(engine.set_lj(0, 2, 1.0, 1.0).is_err());
        assert!(engine.set_lj(0, 1, -1.0, 1.0).is_err());
        let long = LennardJones::new(1.0, 1.0, 3.0).unwrap();
        assert_eq!(
            engine.set_pair(0, 0, long.into()),
            Err(Error::PairCutoffTooLarge {
                pair: 3.0,
                global: 2.5
            })
        );
        assert!(!engine.pair_table().is_set(0, 0));
        let sf = ShiftedForceLennardJones::new(1.0, 1.0, 2.0).unwrap();
        engine
            .set_pairs(Types::Range(0..2), Types::Range(0..2), sf.into())
            .unwrap();
        assert!(engine.pair_table().all_set());
        engine.set_shifted_force_lj(1, 1, 1.1, 0.5).unwrap();
        assert_eq!(engine.pair_table().get(1, 1).cutoff_sq(), 6.25);
    }

    #[test]
    fn box_change_forces_rebuild() {
        let mut engine = Engine::new(2.5, 0.3, &[0, 0]).unwrap();
        engine.set_lj(0, 0, 1.0, 1.0).unwrap();
        engine
            .upload(&[[1.0, 1.0, 1.0], [2.0, 1.0, 1.0]], &[[0.0; 3]; 2])
            .unwrap();
        engine.compute_forces(12.0).unwrap();
        assert_eq!(engine.cells_per_side(), 4);
        engine.change_coordinates(0.5, 0.0);
        engine.compute_forces(6.0).unwrap();
        assert_eq!(engine.builds(), 2);
        assert_eq!(engine.cells_per_side(), 2);
        assert_eq!(engine.cells_per_side_for(6.0), 2);
    }
}
