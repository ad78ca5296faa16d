use std::{collections::HashSet, ops::Range};

use log::debug;

use super::stencil::STENCIL;
use crate::{utils::Index, Container};

/// Cubic grid of cells spanning the box.
///
/// Cell membership is a linked list threaded through an atom-indexed array:
/// `head[cell]` is the first atom of a cell and `next[atom]` the atom after it.
/// Neighbor cells are stored per cell only below five cells per side, where
/// stencil offsets alias; wider grids shift the stencil on the fly.
#[derive(Debug, Default)]
pub struct Grid {
    mcells: usize,
    head: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
    neighbor_cells: Vec<usize>,
    neighbor_ranges: Vec<Range<usize>>,
}
impl Grid {
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of cells along each axis for a box of edge `length`
    pub fn cells_per_side(length: f64, extended_cutoff: f64) -> usize {
        ((length / extended_cutoff).floor() as usize).max(2)
    }
    pub fn mcells(&self) -> usize {
        self.mcells
    }
    pub fn total_num_cells(&self) -> usize {
        self.head.len()
    }

    /// Bin every atom, laying the grid out again first if the cell count changed
    pub fn update(&mut self, positions: &[[f64; 3]], container: &Container, extended_cutoff: f64) {
        let mcells = Self::cells_per_side(container.length(), extended_cutoff);
        if mcells != self.mcells {
            self.set_cells_per_side(mcells);
        }

        self.head.iter_mut().for_each(|h| *h = None);
        self.next.clear();
        self.next.resize(positions.len(), None);
        // Push in reverse so every cell lists its atoms in increasing order
        for (i, coord) in positions.iter().enumerate().rev() {
            let cell = self.coord_to_cell_idx(coord, container);
            self.next[i] = self.head[cell];
            self.head[cell] = Some(i);
        }
    }

    pub fn coord_to_cell_idx(&self, coord: &[f64; 3], container: &Container) -> usize {
        let m = self.mcells;
        let mut inds = [0usize; 3];
        for k in 0..3 {
            inds[k] = ((container.fractional(coord[k]) * m as f64) as usize).min(m - 1);
        }
        Index::from_3d(&inds, m).idx()
    }

    pub fn atoms_in(&self, cell: usize) -> CellAtoms<'_> {
        CellAtoms {
            next: &self.next,
            current: self.head[cell],
        }
    }
    /// Atoms listed after `atom` in its own cell
    pub fn atoms_after(&self, atom: usize) -> CellAtoms<'_> {
        CellAtoms {
            next: &self.next,
            current: self.next[atom],
        }
    }
    /// Cells scanned against `cell`; each unordered pair of distinct cells
    /// shows up under exactly one of its two members
    pub fn neighbor_cells(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        let stored = self
            .neighbor_ranges
            .get(cell)
            .map(|range| self.neighbor_cells[range.clone()].iter().copied());
        let shifted = if stored.is_none() {
            let index = Index::new(cell, self.mcells);
            let stencil: &'static [[i32; 3]] = &STENCIL;
            Some(stencil.iter().map(move |offset| index.shifted(offset).idx()))
        } else {
            None
        };
        stored.into_iter().flatten().chain(shifted.into_iter().flatten())
    }

    fn set_cells_per_side(&mut self, mcells: usize) {
        let ncells = mcells * mcells * mcells;
        self.ensure_capacity(ncells);
        self.mcells = mcells;
        self.head.clear();
        self.head.resize(ncells, None);
        self.neighbor_cells.clear();
        self.neighbor_ranges.clear();
        if mcells >= 5 {
            debug!("Cell grid set to {}^3 cells", mcells);
            return;
        }

        // Below five cells per side, distinct offsets wrap onto the same cell
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        for cell in 0..ncells {
            let start = self.neighbor_cells.len();
            let index = Index::new(cell, mcells);
            for offset in STENCIL.iter() {
                let other = index.shifted(offset).idx();
                if other == cell || !seen.insert((cell.min(other), cell.max(other))) {
                    continue;
                }
                self.neighbor_cells.push(other);
            }
            self.neighbor_ranges.push(start..self.neighbor_cells.len());
        }
        debug!(
            "Cell grid set to {}^3 cells with {} neighbor cell pairs",
            mcells,
            self.neighbor_cells.len()
        );
    }

    fn ensure_capacity(&mut self, ncells: usize) {
        if ncells <= self.head.capacity() {
            return;
        }
        debug!(
            "Growing cell buffers from {} to {} cells",
            self.head.capacity(),
            ncells
        );
        self.head.reserve_exact(ncells - self.head.len());
    }
}

/// Walks one cell's linked list
pub struct CellAtoms<'a> {
    next: &'a [Option<usize>],
    current: Option<usize>,
}
impl Iterator for CellAtoms<'_> {
    type Item = usize;
    fn next(&mut self) -> Option<usize> {
        let atom = self.current?;
        self.current = self.next[atom];
        Some(atom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_for(length: f64, extended_cutoff: f64, positions: &[[f64; 3]]) -> (Grid, Container) {
        let container = Container::cubic(length, extended_cutoff).unwrap();
        let mut grid = Grid::new();
        grid.update(positions, &container, extended_cutoff);
        (grid, container)
    }

    fn cell_pairs(grid: &Grid) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = (0..grid.total_num_cells())
            .flat_map(move |c| grid.neighbor_cells(c).map(move |o| (c.min(o), c.max(o))))
            .collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn cells_per_side_clamps_to_two() {
        assert_eq!(Grid::cells_per_side(10.0, 2.5), 4);
        assert_eq!(Grid::cells_per_side(10.0, 3.4), 2);
        assert_eq!(Grid::cells_per_side(10.0, 6.0), 2);
    }

    #[test]
    fn every_atom_lands_in_one_cell() {
        let positions = vec![
            [0.1, 0.1, 0.1],
            [9.9, 0.1, 0.1],
            [-0.1, 5.0, 12.0],
            [4.0, 4.0, 4.0],
            [0.2, 0.2, 0.2],
        ];
        let (grid, container) = grid_for(10.0, 2.5, &positions);
        assert_eq!(grid.mcells(), 4);

        let mut seen = vec![0; positions.len()];
        for cell in 0..grid.total_num_cells() {
            let atoms: Vec<usize> = grid.atoms_in(cell).collect();
            assert!(atoms.windows(2).all(|w| w[0] < w[1]));
            for atom in atoms {
                assert_eq!(grid.coord_to_cell_idx(&positions[atom], &container), cell);
                seen[atom] += 1;
            }
        }
        assert_eq!(seen, vec![1; positions.len()]);
        // wrapped coordinates share cells with their images
        assert_eq!(
            grid.coord_to_cell_idx(&positions[2], &container),
            grid.coord_to_cell_idx(&[9.9, 5.0, 2.0], &container)
        );
        assert_eq!(grid.atoms_after(0).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn wide_grid_uses_whole_stencil() {
        let (grid, _) = grid_for(12.0, 2.0, &[]);
        assert_eq!(grid.mcells(), 6);
        assert!(grid.neighbor_cells.is_empty());
        for cell in 0..grid.total_num_cells() {
            assert_eq!(grid.neighbor_cells(cell).count(), STENCIL.len());
        }
        let pairs = cell_pairs(&grid);
        let mut unique = pairs.clone();
        unique.dedup();
        assert_eq!(unique.len(), pairs.len());
    }

    #[test]
    fn narrow_grids_visit_each_cell_pair_once() {
        // with two or three cells per side every cell reaches every other one
        for (length, mcells) in [(5.0, 2), (7.5, 3), (10.0, 4)] {
            let (grid, _) = grid_for(length, 2.4, &[]);
            assert_eq!(grid.mcells(), mcells);
            let ncells = grid.total_num_cells();
            let pairs = cell_pairs(&grid);
            assert!(pairs.iter().all(|(a, b)| a != b));
            let mut unique = pairs.clone();
            unique.dedup();
            assert_eq!(unique.len(), pairs.len());
            if mcells < 4 {
                assert_eq!(pairs.len(), ncells * (ncells - 1) / 2);
            }
        }
    }

    #[test]
    fn relayout_keeps_capacity() {
        let mut grid = Grid::new();
        let many_cells = Container::cubic(20.0, 2.0).unwrap();
        grid.update(&[], &many_cells, 2.0);
        let capacity = grid.head.capacity();
        let few_cells = Container::cubic(5.0, 2.0).unwrap();
        grid.update(&[], &few_cells, 2.0);
        assert_eq!(grid.mcells(), 2);
        assert_eq!(grid.head.capacity(), capacity);
    }

    #[test]
    fn relayout_grows_for_more_cells() {
        let mut grid = Grid::new();
        let few_cells = Container::cubic(5.0, 2.0).unwrap();
        grid.update(&[[4.9, 4.9, 4.9]], &few_cells, 2.0);
        assert_eq!(grid.total_num_cells(), 8);
        assert_eq!(grid.neighbor_ranges.len(), 8);

        let many_cells = Container::cubic(20.0, 2.0).unwrap();
        let positions = [[19.9, 19.9, 19.9]];
        grid.update(&positions, &many_cells, 2.0);
        assert_eq!(grid.mcells(), 10);
        assert_eq!(grid.total_num_cells(), 1000);
        assert!(grid.head.capacity() >= 1000);
        assert!(grid.neighbor_ranges.is_empty());
        assert_eq!(grid.atoms_in(999).collect::<Vec<_>>(), vec![0]);
        assert_eq!(grid.neighbor_cells(999).count(), STENCIL.len());
    }
}
