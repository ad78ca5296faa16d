use log::trace;

use crate::{
    atomic::{PairModelTrait, PairOutput, PairTable},
    utils::norm_squared,
    Atoms, Container, NeighborList,
};

/// Totals accumulated over every interacting pair
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Totals {
    pub energy: f64,
    pub virial: f64,
}

/// Recompute every force from scratch.
///
/// The neighbor list is rebuilt first whenever it can no longer be trusted.
/// Each unordered pair sits in the list once, so its force is added to both
/// atoms here and nowhere else.
pub fn compute_forces(
    atoms: &mut Atoms,
    table: &PairTable,
    neighbor_list: &mut NeighborList,
    container: &Container,
) -> Totals {
    neighbor_list.update(atoms.positions(), container);
    atoms.reset_forces();

    let mut totals = Totals::default();
    for i in 0..atoms.num_atoms() {
        let typei = atoms.types()[i];
        let posi = atoms.positions()[i];

        for &j in neighbor_list.neighbors(i) {
            let pair = table.get(typei, atoms.types()[j]);
            let r = container.displacement(&posi, &atoms.positions()[j]);
            let r2 = norm_squared(&r);
            // unset pairs have a zero cutoff and never interact, even when overlapping
            if !(r2 < pair.cutoff_sq()) {
                continue;
            }

            let PairOutput { energy, virial } = pair.model().evaluate(r2);
            totals.energy += energy;
            totals.virial += virial;

            // F_i = (W / r^2) r_ij with r_ij = R_i - R_j; F_j = -F_i
            let f_mag = virial / r2;
            let force = [r[0] * f_mag, r[1] * f_mag, r[2] * f_mag];
            atoms.increment_force(i, force);
            atoms.increment_force(j, [-force[0], -force[1], -force[2]]);
        }
    }
    trace!(
        "Computed forces: energy {}, virial {}",
        totals.energy,
        totals.virial
    );
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atomic::{LennardJones, PairModel};
    use crate::neighbor::UpdateSettings;
    use crate::utils::Types;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn dimer(separation: f64, types: &[usize]) -> (Atoms, NeighborList, Container) {
        let mut atoms = Atoms::new(types).unwrap();
        atoms
            .upload(&[[1.0, 1.0, 1.0], [1.0 + separation, 1.0, 1.0]], &[[0.0; 3]; 2])
            .unwrap();
        let list = NeighborList::new(2, 2.5, 0.3, UpdateSettings::new());
        let container = Container::cubic(8.0, 2.8).unwrap();
        (atoms, list, container)
    }

    fn lj_table(num_types: usize) -> PairTable {
        let mut table = PairTable::new(num_types, 2.5);
        let lj: PairModel = LennardJones::new(1.0, 1.0, 2.5).unwrap().into();
        table.set(Types::One(0), Types::One(0), lj).unwrap();
        table
    }

    #[test]
    fn dimer_at_minimum() {
        let (mut atoms, mut list, container) = dimer(2f64.powf(1.0 / 6.0), &[0, 0]);
        let totals = compute_forces(&mut atoms, &lj_table(1), &mut list, &container);
        assert_relative_eq!(totals.energy, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(totals.virial, 0.0, epsilon = 1e-12);
        for f in atoms.forces().iter().flatten() {
            assert_abs_diff_eq!(*f, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn repulsive_dimer_pushes_apart() {
        let (mut atoms, mut list, container) = dimer(1.0, &[0, 0]);
        compute_forces(&mut atoms, &lj_table(1), &mut list, &container);
        let forces = atoms.forces();
        // W = 24 at r = sigma, so |F| = 24
        assert_relative_eq!(forces[0][0], -24.0, epsilon = 1e-12);
        assert_relative_eq!(forces[1][0], 24.0, epsilon = 1e-12);
        assert_eq!(forces[0][1], 0.0);
    }

    #[test]
    fn skips_pairs_in_skin_and_unset_types() {
        // inside the list but beyond the pair cutoff
        let (mut atoms, mut list, container) = dimer(2.6, &[0, 0]);
        let totals = compute_forces(&mut atoms, &lj_table(1), &mut list, &container);
        assert_eq!(list.num_pairs(), 1);
        assert_eq!(totals, Totals::default());

        // type pair (0, 1) was never set
        let (mut atoms, mut list, container) = dimer(1.0, &[0, 1]);
        let totals = compute_forces(&mut atoms, &lj_table(2), &mut list, &container);
        assert_eq!(totals, Totals::default());
        assert_eq!(atoms.forces(), &[[0.0; 3]; 2]);
    }

    #[test]
    fn overlapping_unset_pair_is_ignored() {
        let (mut atoms, mut list, container) = dimer(0.0, &[0, 1]);
        let totals = compute_forces(&mut atoms, &lj_table(2), &mut list, &container);
        assert_eq!(list.num_pairs(), 1);
        assert_eq!(totals, Totals::default());
        assert_eq!(atoms.forces(), &[[0.0; 3]; 2]);
    }

    #[test]
    fn pair_across_boundary_uses_nearest_image() {
        let mut atoms = Atoms::new(&[0, 0]).unwrap();
        atoms
            .upload(&[[0.2, 4.0, 4.0], [7.8, 4.0, 4.0]], &[[0.0; 3]; 2])
            .unwrap();
        let mut list = NeighborList::new(2, 2.5, 0.3, UpdateSettings::new());
        let container = Container::cubic(8.0, 2.8).unwrap();
        compute_forces(&mut atoms, &lj_table(1), &mut list, &container);
        // 0.4 apart through the boundary: atom 0 is pushed towards +x
        assert!(atoms.forces()[0][0] > 0.0);
        assert_relative_eq!(atoms.forces()[0][0], -atoms.forces()[1][0]);
    }
}
