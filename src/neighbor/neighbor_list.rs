use log::debug;

use super::{Grid, UpdateSettings};
use crate::{
    utils::{distance_squared, norm_squared},
    Container,
};

/// Verlet list: for every atom `i`, the partners stored in
/// `neighbor[first[i]..last[i]]`, with each unordered pair listed once.
#[derive(Debug)]
pub struct NeighborList {
    force_distance: f64,
    skin_distance: f64,
    settings: UpdateSettings,
    grid: Grid,
    first: Vec<usize>,
    last: Vec<usize>,
    neighbor: Vec<usize>,
    npairs: usize,
    builds: usize,
    pos_at_prev_build: Vec<[f64; 3]>,
    built_for: Option<Container>,
}
impl NeighborList {
    pub fn new(
        num_atoms: usize,
        force_distance: f64,
        skin_distance: f64,
        settings: UpdateSettings,
    ) -> Self {
        assert!(
            force_distance > 0.0,
            "Force cutoff distance must be positive"
        );
        assert!(
            skin_distance >= 0.0,
            "Neighbor list skin distance must be non-negative"
        );
        Self {
            force_distance,
            skin_distance,
            settings,
            grid: Grid::new(),
            first: vec![0; num_atoms],
            last: vec![0; num_atoms],
            neighbor: vec![0; settings.pairs_per_atom.max(1) * num_atoms],
            npairs: 0,
            builds: 0,
            pos_at_prev_build: Vec::with_capacity(num_atoms),
            built_for: None,
        }
    }

    // Getters
    pub fn force_distance(&self) -> f64 {
        self.force_distance
    }
    pub fn skin_distance(&self) -> f64 {
        self.skin_distance
    }
    /// Distance within which pairs enter the list
    pub fn cutoff_distance(&self) -> f64 {
        self.force_distance + self.skin_distance
    }
    pub fn settings(&self) -> &UpdateSettings {
        &self.settings
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn builds(&self) -> usize {
        self.builds
    }
    pub fn num_pairs(&self) -> usize {
        self.npairs
    }
    /// Number of pairs the neighbor buffer holds before it has to grow
    pub fn capacity(&self) -> usize {
        self.neighbor.len()
    }
    pub fn is_built(&self) -> bool {
        self.built_for.is_some()
    }
    /// Partners of atom `i`
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.neighbor[self.first[i]..self.last[i]]
    }

    /// Largest squared displacement of any atom since the last build
    pub fn max_displacement_sq(&self, positions: &[[f64; 3]]) -> f64 {
        self.pos_at_prev_build
            .iter()
            .zip(positions.iter())
            .map(|(old, new)| distance_squared(new, old))
            .fold(0.0, f64::max)
    }

    pub fn needs_rebuild(&self, positions: &[[f64; 3]], container: &Container) -> bool {
        match &self.built_for {
            Some(built_for) if built_for == container => {
                positions.len() != self.pos_at_prev_build.len()
                    || self.settings.should_rebuild(
                        self.max_displacement_sq(positions),
                        self.skin_distance,
                    )
            }
            _ => true,
        }
    }

    /// Rebuild the list if it can no longer be trusted; returns whether it was rebuilt
    pub fn update(&mut self, positions: &[[f64; 3]], container: &Container) -> bool {
        if !self.needs_rebuild(positions, container) {
            return false;
        }
        self.build(positions, container);
        true
    }

    /// Bin the atoms and collect every pair within the extended cutoff
    pub fn build(&mut self, positions: &[[f64; 3]], container: &Container) {
        self.grid
            .update(positions, container, self.cutoff_distance());
        loop {
            match self.fill(positions, container) {
                Ok(npairs) => {
                    self.npairs = npairs;
                    break;
                }
                Err(required) => self.grow(required),
            }
        }
        self.pos_at_prev_build.clear();
        self.pos_at_prev_build.extend_from_slice(positions);
        self.built_for = Some(*container);
        self.builds += 1;
        debug!(
            "Neighbor list build {}: {} pairs, {}^3 cells",
            self.builds,
            self.npairs,
            self.grid.mcells()
        );
    }

    /// Fails with the number of pairs found when they do not fit the buffer
    fn fill(&mut self, positions: &[[f64; 3]], container: &Container) -> Result<usize, usize> {
        let cutoff_sq = self.cutoff_distance() * self.cutoff_distance();
        let capacity = self.neighbor.len();
        let num_atoms = positions.len();
        let Self {
            grid,
            first,
            last,
            neighbor,
            ..
        } = self;
        let grid: &Grid = grid;
        first.clear();
        first.resize(num_atoms, 0);
        last.clear();
        last.resize(num_atoms, 0);

        let mut npairs = 0;
        for cell in 0..grid.total_num_cells() {
            for i in grid.atoms_in(cell) {
                first[i] = npairs;
                let posi = &positions[i];
                let candidates = grid.atoms_after(i).chain(
                    grid.neighbor_cells(cell)
                        .flat_map(move |other| grid.atoms_in(other)),
                );
                for j in candidates {
                    let r = container.displacement(posi, &positions[j]);
                    if norm_squared(&r) <= cutoff_sq {
                        if npairs < capacity {
                            neighbor[npairs] = j;
                        }
                        npairs += 1;
                    }
                }
                last[i] = npairs;
            }
        }

        if npairs > capacity {
            Err(npairs)
        } else {
            Ok(npairs)
        }
    }

    fn grow(&mut self, required: usize) {
        let grown = (self.neighbor.len() as f64 * self.settings.growth_factor).ceil() as usize;
        let new_len = grown.max(required);
        debug!(
            "Growing neighbor list from {} to {} pairs",
            self.neighbor.len(),
            new_len
        );
        self.neighbor.resize(new_len, 0);
    }
}
